use std::sync::LazyLock;

use grammar_core::{Coords, Location};
use regex::Regex;

use crate::token::{Token, TokenKind};

struct Pattern {
    regex: Regex,
    kind: Option<TokenKind>,
}

impl Pattern {
    fn new(source: &str, kind: Option<TokenKind>) -> Self {
        let regex = Regex::new(&format!(r"\A(?:{source})")).expect("pattern table is valid");
        Self { regex, kind }
    }
}

/// Lexical rules in precedence order; the first one matching a prefix of the
/// remaining input wins. A rule without a kind consumes its match silently.
static PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::new(r"\z", Some(TokenKind::EndOfInput)),
        Pattern::new(r"(?-u:\s)+", None),
        Pattern::new(r"//.*", None),
        Pattern::new(r":", Some(TokenKind::Colon)),
        Pattern::new(r"\|", Some(TokenKind::Pipe)),
        Pattern::new(r";", Some(TokenKind::Semicolon)),
        Pattern::new(r"[a-z][A-Za-z0-9_]*", Some(TokenKind::NonTerminal)),
        Pattern::new(r"[A-Z][A-Za-z0-9_]*", Some(TokenKind::Terminal)),
        // anything else is reported to the parser as an error token
        Pattern::new(r"(?s:.)", Some(TokenKind::Error)),
    ]
});

#[derive(Debug)]
pub struct Scanner<'src> {
    content: &'src str,
    offset: usize,
    coords: Coords,
}

impl<'src> Scanner<'src> {
    pub fn new(content: &'src str) -> Self {
        Self {
            content,
            offset: 0,
            coords: Coords::START,
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            let rest = &self.content[self.offset..];
            let (kind, len) = Self::match_prefix(rest);

            let start_byte = self.offset;
            let start_coords = self.coords;
            let text = &rest[..len];

            self.coords.advance(text);
            self.offset += len;

            let Some(kind) = kind else { continue };

            let lexeme = match kind {
                TokenKind::EndOfInput => Token::EOF_LEXEME,
                _ => text,
            };

            break Token {
                kind,
                lexeme: lexeme.to_string(),
                location: Location::new(start_byte, self.offset),
                coords: start_coords,
            };
        }
    }

    fn match_prefix(rest: &str) -> (Option<TokenKind>, usize) {
        PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(rest).map(|m| (pattern.kind, m.end())))
            .unwrap_or_else(|| {
                let len = rest.chars().next().map_or(0, char::len_utf8);
                (Some(TokenKind::Error), len)
            })
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token {
                kind: TokenKind::EndOfInput,
                ..
            } => None,
            token => Some(token),
        }
    }
}
