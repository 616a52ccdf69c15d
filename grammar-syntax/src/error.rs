use grammar_core::Coords;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{coords}: syntax error at '{lexeme}'")]
    Syntax { coords: Coords, lexeme: String },
    #[error("{coords}: multiple rule-sets for {name}; first defined at {first}")]
    DuplicateDefinition {
        name: String,
        coords: Coords,
        first: Coords,
    },
}
