use std::fmt;

use serde::Serialize;

/// Aggregate counts of a valid grammar.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Stats {
    /// Distinct non-terminals that have a rule-set.
    pub rule_sets: usize,
    /// Non-terminal occurrences, defining ones included.
    pub non_terminals: usize,
    pub terminals: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.rule_sets, self.non_terminals, self.terminals)
    }
}
