use thiserror::Error;

use crate::symbol_set::SymbolSet;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no rule-sets found")]
    EmptyGrammar,
    #[error("no rules for {0}")]
    UndefinedSymbols(SymbolSet),
    #[error("no uses of rules for {0}")]
    UnreachableSymbols(SymbolSet),
}
