pub mod error;
pub mod parser;
pub mod symbol_table;

pub use error::{Error, Result};
pub use parser::{RecognizedGrammar, Recognizer};
pub use symbol_table::SymbolTable;
