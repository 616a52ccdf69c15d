pub mod error;
pub mod stats;
pub mod symbol_set;
pub mod validator;


pub use error::{Error, Result};
pub use stats::Stats;
pub use symbol_set::SymbolSet;
pub use validator::validate;
