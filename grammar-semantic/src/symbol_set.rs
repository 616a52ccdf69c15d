use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Sorted set of non-terminal names, displayed as `{a, b, c}`.
#[derive(Debug, Default, Clone, Serialize, PartialEq, Eq)]
pub struct SymbolSet(BTreeSet<String>);

impl SymbolSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
        }
        write!(f, "}}")
    }
}
