use std::collections::HashMap;

use super::periodic_table::{Element, PERIODIC_TABLE};

/// Read-only lookup from element symbol to element data.
///
/// Symbols are matched exactly, so `"Co"` and `"CO"` are different keys.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    by_symbol: HashMap<&'static str, &'static Element>,
}

impl SymbolTable {
    pub fn new(elements: &'static [Element]) -> SymbolTable {
        let by_symbol = elements
            .iter()
            .map(|element| (element.symbol, element))
            .collect();
        SymbolTable { by_symbol }
    }

    /// The full periodic table
    pub fn standard() -> SymbolTable {
        Self::new(&PERIODIC_TABLE)
    }

    pub fn get(&self, symbol: &str) -> Option<&'static Element> {
        self.by_symbol.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    /// Atomic weight of an element in g/mol
    pub fn weight(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).map(|element| element.atomic_weight)
    }

    /// Element spelled by a single letter in any case, e.g. `'n'` -> N
    pub fn single(&self, letter: char) -> Option<&'static Element> {
        let symbol = letter.to_ascii_uppercase().to_string();
        self.get(&symbol)
    }

    /// Element spelled by two letters in any case, e.g. `('N', 'O')` -> No
    pub fn pair(&self, first: char, second: char) -> Option<&'static Element> {
        let symbol: String = [first.to_ascii_uppercase(), second.to_ascii_lowercase()]
            .iter()
            .collect();
        self.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_lookup() {
        let table = SymbolTable::standard();
        assert_eq!(table.len(), 118);
        assert_eq!(table.weight("O"), Some(15.999));
        assert_eq!(table.weight("Fe"), Some(55.845));
        assert_eq!(table.get("No").map(|e| e.name), Some("Nobelium"));
    }

    #[test]
    fn test_lookup_is_case_exact() {
        let table = SymbolTable::standard();
        assert!(table.contains("Co"));
        assert!(!table.contains("CO"));
        assert!(!table.contains("co"));
        assert!(!table.contains("Xx"));
    }

    #[test]
    fn test_case_folding_helpers() {
        let table = SymbolTable::standard();
        assert_eq!(table.single('n').map(|e| e.symbol), Some("N"));
        assert_eq!(table.pair('N', 'O').map(|e| e.symbol), Some("No"));
        assert_eq!(table.pair('c', 'L').map(|e| e.symbol), Some("Cl"));
        assert!(table.single('q').is_none());
        assert!(table.pair('x', 'x').is_none());
    }

    #[test]
    fn test_custom_table() {
        static TINY: [Element; 2] = [
            Element { atomic_number: 1, symbol: "H", name: "Hydrogen", atomic_weight: 1.0 },
            Element { atomic_number: 8, symbol: "O", name: "Oxygen", atomic_weight: 16.0 },
        ];
        let table = SymbolTable::new(&TINY);
        assert_eq!(table.len(), 2);
        assert_eq!(table.weight("O"), Some(16.0));
        assert!(!table.contains("C"));
    }
}
