use std::path::Path;

use grammar_semantic::Stats;
use grammar_syntax::Recognizer;

use crate::error::{Error, Result};

/// One grammar specification, analysed at most once.
#[derive(Debug)]
pub struct GrammarStats {
    source: String,
}

impl GrammarStats {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "reading grammar");

        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_source(source))
    }

    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn compute_stats(self) -> Result<Stats> {
        let grammar = Recognizer::new(&self.source).recognize()?;
        let stats = grammar_semantic::validate(&grammar)?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name)
    }

    fn analyze_fixture(name: &str) -> Result<Stats> {
        GrammarStats::open(fixture(name)).and_then(GrammarStats::compute_stats)
    }

    #[test]
    fn test_valid_grammar_file() {
        let stats = analyze_fixture("arith.grammar").unwrap();
        // non-terminals: expr expr term, term, term term factor, factor,
        // factor expr, factor
        // terminals: AddOp MulOp Number LParen RParen SubOp
        insta::assert_snapshot!(stats, @"3 11 6");
    }

    #[test]
    fn test_duplicate_rule_set_file() {
        let err = analyze_fixture("duplicate.grammar").unwrap_err();
        assert!(matches!(err, Error::Syntax(_)));
        insta::assert_snapshot!(err, @"3:1: multiple rule-sets for s; first defined at 1:1");
    }

    #[test]
    fn test_lexical_error_file() {
        let err = analyze_fixture("lexical.grammar").unwrap_err();
        insta::assert_snapshot!(err, @"2:7: syntax error at '#'");
    }

    #[test]
    fn test_undefined_symbol_file() {
        let err = analyze_fixture("undefined.grammar").unwrap_err();
        assert!(matches!(err, Error::Semantic(_)));
        insta::assert_snapshot!(err, @"no rules for {stmts}");
    }

    #[test]
    fn test_unused_symbol_file() {
        let err = analyze_fixture("unused.grammar").unwrap_err();
        insta::assert_snapshot!(err, @"no uses of rules for {stmt}");
    }

    #[test]
    fn test_empty_grammar_file() {
        let err = analyze_fixture("empty.grammar").unwrap_err();
        insta::assert_snapshot!(err, @"no rule-sets found");
    }

    #[test]
    fn test_missing_file() {
        let path = fixture("does-not-exist.grammar");
        let err = GrammarStats::open(&path).unwrap_err();

        match err {
            Error::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected an io error, got: {other:?}"),
        }
    }

    #[test]
    fn test_from_source() {
        let stats = GrammarStats::from_source("s : A n ; n : B | ;")
            .compute_stats()
            .unwrap();
        assert_eq!(stats.to_string(), "2 3 2");
    }
}
