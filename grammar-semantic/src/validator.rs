use grammar_syntax::RecognizedGrammar;

use crate::error::{Error, Result};
use crate::stats::Stats;
use crate::symbol_set::SymbolSet;

/// Checks that the recognized grammar is closed: it has at least one
/// rule-set, every used non-terminal is defined and every defined one is
/// used somewhere. Reachability from the start symbol is not required.
pub fn validate(grammar: &RecognizedGrammar) -> Result<Stats> {
    let symbols = &grammar.symbols;

    if symbols.definition_count() == 0 {
        return Err(Error::EmptyGrammar);
    }

    let undefined = symbols
        .used_names()
        .filter(|name| !symbols.is_defined(name))
        .collect::<SymbolSet>();
    if !undefined.is_empty() {
        tracing::debug!(%undefined, "grammar uses undefined non-terminals");
        return Err(Error::UndefinedSymbols(undefined));
    }

    let unused = symbols
        .defined_names()
        .filter(|name| !symbols.is_used(name))
        .collect::<SymbolSet>();
    if !unused.is_empty() {
        tracing::debug!(%unused, "grammar defines unused non-terminals");
        return Err(Error::UnreachableSymbols(unused));
    }

    let stats = Stats {
        rule_sets: symbols.definition_count(),
        non_terminals: grammar.non_terminals,
        terminals: grammar.terminals,
    };
    tracing::debug!(%stats, "grammar is valid");

    Ok(stats)
}
