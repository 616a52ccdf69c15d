use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use grammar_core::Coords;

/// Non-terminal bookkeeping gathered while recognizing a grammar.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    definitions: HashMap<String, Coords>,
    uses: HashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the rule-set for `name`. When `name` already has one, nothing
    /// changes and the coordinates of the first definition are returned.
    pub fn define(&mut self, name: &str, coords: Coords) -> Result<(), Coords> {
        match self.definitions.entry(name.to_string()) {
            Entry::Occupied(first) => Err(*first.get()),
            Entry::Vacant(slot) => {
                slot.insert(coords);
                Ok(())
            }
        }
    }

    pub fn mark_used(&mut self, name: &str) {
        if !self.uses.contains(name) {
            self.uses.insert(name.to_string());
        }
    }

    pub fn definition(&self, name: &str) -> Option<Coords> {
        self.definitions.get(name).copied()
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.uses.contains(name)
    }

    pub fn defined_names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn used_names(&self) -> impl Iterator<Item = &str> {
        self.uses.iter().map(String::as_str)
    }

    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_keeps_first_definition() {
        let mut table = SymbolTable::new();
        assert_eq!(table.define("expr", Coords::new(1, 1)), Ok(()));
        assert_eq!(
            table.define("expr", Coords::new(4, 1)),
            Err(Coords::new(1, 1))
        );
        assert_eq!(table.definition("expr"), Some(Coords::new(1, 1)));
        assert_eq!(table.definition_count(), 1);
    }

    #[test]
    fn test_uses_are_a_set() {
        let mut table = SymbolTable::new();
        table.mark_used("term");
        table.mark_used("term");
        table.mark_used("expr");

        let mut used = table.used_names().collect::<Vec<_>>();
        used.sort();
        assert_eq!(used, vec!["expr", "term"]);
        assert!(table.is_used("term"));
        assert!(!table.is_defined("term"));
    }
}
