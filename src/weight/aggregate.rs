//! Molecular weights from element counts
//!
//! Weights are in g/mol and kept at full `f64` precision; rounding is left to
//! whoever displays them.

use crate::elements::SymbolTable;
use crate::error::FormulaError;
use crate::formula::AtomCount;

/// One element's contribution to a sub-formula
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub symbol: String,
    pub name: &'static str,
    pub count: u64,
    pub weight: f64,
    pub line_weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub rows: Vec<BreakdownRow>,
    pub subtotal: f64,
}

/// Weigh every element in `counts`, in the order the counts list them
pub fn aggregate(counts: &AtomCount, table: &SymbolTable) -> Result<Breakdown, FormulaError> {
    let mut rows = Vec::with_capacity(counts.len());
    let mut subtotal = 0.0;

    for (symbol, count) in counts.iter() {
        let element = table
            .get(symbol)
            .ok_or_else(|| FormulaError::MissingWeight(symbol.to_string()))?;
        let line_weight = element.atomic_weight * count as f64;
        subtotal += line_weight;

        rows.push(BreakdownRow {
            symbol: element.symbol.to_string(),
            name: element.name,
            count,
            weight: element.atomic_weight,
            line_weight,
        });
    }

    Ok(Breakdown { rows, subtotal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Element;

    #[test]
    fn test_nitrogen_dioxide() {
        let counts: AtomCount = [("N", 1), ("O", 2)].into_iter().collect();
        let breakdown = aggregate(&counts, &SymbolTable::standard()).unwrap();
        assert!((breakdown.subtotal - 46.005).abs() < 0.001);

        assert_eq!(breakdown.rows.len(), 2);
        assert_eq!(breakdown.rows[0].symbol, "N");
        assert_eq!(breakdown.rows[1].name, "Oxygen");
        assert!((breakdown.rows[1].line_weight - 31.998).abs() < 0.001);
    }

    #[test]
    fn test_rows_follow_count_order() {
        let counts: AtomCount = [("O", 4), ("S", 1), ("Cu", 1)].into_iter().collect();
        let breakdown = aggregate(&counts, &SymbolTable::standard()).unwrap();
        let symbols: Vec<_> = breakdown.rows.iter().map(|row| row.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["O", "S", "Cu"]);
        assert!((breakdown.subtotal - 159.602).abs() < 0.001);
    }

    #[test]
    fn test_empty_counts_weigh_nothing() {
        let breakdown = aggregate(&AtomCount::new(), &SymbolTable::standard()).unwrap();
        assert!(breakdown.rows.is_empty());
        assert_eq!(breakdown.subtotal, 0.0);
    }

    #[test]
    fn test_missing_weight() {
        static HYDROGEN_ONLY: [Element; 1] = [Element { atomic_number: 1, symbol: "H", name: "Hydrogen", atomic_weight: 1.008 }];
        let counts: AtomCount = [("H", 2), ("O", 1)].into_iter().collect();
        assert_eq!(
            aggregate(&counts, &SymbolTable::new(&HYDROGEN_ONLY)),
            Err(FormulaError::MissingWeight("O".to_string()))
        );
    }
}
