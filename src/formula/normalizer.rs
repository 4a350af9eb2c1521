//! Repairs free-typed formulas into canonical form
//!
//! Letter case is fixed to match element symbols, hydrate glyphs are unified
//! and anything that cannot be part of a formula is dropped. When two letters
//! can be read both as one symbol and as two, the configured
//! [`DisambiguationPolicy`] decides.

use log::{debug, trace};

use super::advisory::Advisory;
use super::hydrate::{is_separator_glyph, SEPARATOR};
use super::policy::{Ambiguity, DisambiguationPolicy, Reading};
use crate::elements::{Element, SymbolTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub canonical: String,
    pub advisories: Vec<Advisory>,
}

pub struct Normalizer<'a> {
    table: &'a SymbolTable,
    policy: &'a dyn DisambiguationPolicy,
}

impl<'a> Normalizer<'a> {
    pub fn new(table: &'a SymbolTable, policy: &'a dyn DisambiguationPolicy) -> Normalizer<'a> {
        Normalizer { table, policy }
    }

    pub fn normalize(&self, raw: &str) -> Normalized {
        let chars: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let mut canonical = String::with_capacity(chars.len());
        let mut advisories = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c.is_ascii_alphabetic() {
                let Some((element, len, advisory)) = self.read_symbol(&chars, i) else {
                    trace!("Skipping letter '{c}' at {i}: no element matches");
                    i += 1;
                    continue;
                };

                let typed: String = chars[i..i + len].iter().collect();
                match advisory {
                    Some(advisory) => advisories.push(advisory),
                    None if typed != element.symbol => {
                        advisories.push(Advisory::autocorrected(typed, element.symbol));
                    }
                    None => {}
                }

                canonical.push_str(element.symbol);
                i += len;
            } else if c.is_ascii_digit() || c == '(' || c == ')' {
                canonical.push(c);
                i += 1;
            } else if is_separator_glyph(c) {
                canonical.push(SEPARATOR);
                i += 1;
            } else {
                trace!("Skipping unrecognized character {c:?} at {i}");
                i += 1;
            }
        }

        debug!("Normalized {raw:?} to {canonical:?} with {} advisories", advisories.len());
        Normalized { canonical, advisories }
    }

    /// Reads the symbol starting at `i`, returning the element, the number of
    /// characters it spans and the policy's advisory if it had to choose.
    fn read_symbol(&self, chars: &[char], i: usize) -> Option<(&'static Element, usize, Option<Advisory>)> {
        let first = chars[i];
        let second = chars.get(i + 1).copied().filter(|c| c.is_ascii_alphabetic());

        let single = self.table.single(first);
        let pair = second.and_then(|second| self.table.pair(first, second));

        match (single, pair, second) {
            (Some(single), Some(pair), Some(second)) => {
                if !self.starts_symbol(chars, i + 1) {
                    return Some((pair, 2, None));
                }

                let raw: String = [first, second].iter().collect();
                let ambiguity = Ambiguity {
                    raw: &raw,
                    single,
                    pair,
                    follower: self.table.single(second),
                };
                let resolution = self.policy.resolve(&ambiguity);
                debug!(
                    "Ambiguous {raw:?}: {} chose {:?}",
                    self.policy.name(),
                    resolution.reading
                );
                let element = resolution.reading.element(&ambiguity);
                Some((element, resolution.reading.len(), resolution.advisory))
            }
            (Some(single), _, _) => Some((single, Reading::Single.len(), None)),
            (None, Some(pair), _) => Some((pair, Reading::Pair.len(), None)),
            (None, None, _) => None,
        }
    }

    /// Whether a symbol can begin at `i`, looking one character further
    fn starts_symbol(&self, chars: &[char], i: usize) -> bool {
        let Some(&c) = chars.get(i) else {
            return false;
        };
        if self.table.single(c).is_some() {
            return true;
        }
        chars
            .get(i + 1)
            .filter(|next| next.is_ascii_alphabetic())
            .is_some_and(|&next| self.table.pair(c, next).is_some())
    }
}

/// Normalize `raw` against `table` using `policy` for ambiguous letters
pub fn normalize(raw: &str, table: &SymbolTable, policy: &dyn DisambiguationPolicy) -> Normalized {
    Normalizer::new(table, policy).normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::advisory::AdvisoryKind;
    use crate::formula::policy::{PolicyKind, PreferCommon, PreferLongest};

    fn canonical(raw: &str) -> String {
        normalize(raw, &SymbolTable::standard(), &PolicyKind::CaseAware).canonical
    }

    #[test]
    fn test_canonical_input_unchanged() {
        let table = SymbolTable::standard();
        let formulas = [
            "H2O", "NaCl", "C6H12O6", "Fe2(SO4)3", "CuSO4·5H2O", "NO2", "Mg3(PO4)2", "CoCl2",
            "PbO", "SnCl2", "CsCl", "OsO4", "HfO2", "ScCl3",
        ];
        for formula in formulas {
            let normalized = normalize(formula, &table, &PolicyKind::CaseAware);
            assert_eq!(normalized.canonical, formula);
            assert!(normalized.advisories.is_empty(), "{formula}: {:?}", normalized.advisories);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let table = SymbolTable::standard();
        for raw in ["h2so4", "nacl", "no2", "co", "CL2", " cuso4 . 5h2o ", "mg3(po4)2", "fe2(so4)3", "caco3"] {
            let once = normalize(raw, &table, &PolicyKind::CaseAware).canonical;
            let twice = normalize(&once, &table, &PolicyKind::CaseAware);
            assert_eq!(twice.canonical, once, "{raw}");
            assert!(twice.advisories.is_empty(), "{raw}: {:?}", twice.advisories);
        }
    }

    #[test]
    fn test_case_repair() {
        assert_eq!(canonical("h2so4"), "H2SO4");
        assert_eq!(canonical("nacl"), "NaCl");
        assert_eq!(canonical("MGO"), "MgO");
        assert_eq!(canonical("CL2"), "Cl2");
    }

    #[test]
    fn test_autocorrect_advisories() {
        let normalized = normalize("mgO", &SymbolTable::standard(), &PolicyKind::CaseAware);
        assert_eq!(normalized.canonical, "MgO");
        assert_eq!(normalized.advisories, vec![Advisory::autocorrected("mg", "Mg")]);
    }

    #[test]
    fn test_whitespace_and_garbage_dropped() {
        assert_eq!(canonical("  H2 O  "), "H2O");
        assert_eq!(canonical("H2O!?"), "H2O");
        assert_eq!(canonical("C6-H12_O6"), "C6H12O6");
        // no element is spelled with q or x
        assert_eq!(canonical("Qx2"), "2");
    }

    #[test]
    fn test_separators_unified() {
        assert_eq!(canonical("CuSO4.5H2O"), "CuSO4·5H2O");
        assert_eq!(canonical("CuSO4*5H2O"), "CuSO4·5H2O");
        assert_eq!(canonical("CuSO4 · 5H2O"), "CuSO4·5H2O");
    }

    #[test]
    fn test_exact_case_branch() {
        let table = SymbolTable::standard();

        let upper = normalize("NO2", &table, &PolicyKind::CaseAware);
        assert_eq!(upper.canonical, "NO2");
        assert!(upper.advisories.is_empty());

        let nobelium = normalize("No2", &table, &PolicyKind::CaseAware);
        assert_eq!(nobelium.canonical, "No2");
        assert_eq!(nobelium.advisories.len(), 1);
        assert_eq!(nobelium.advisories[0].kind, AdvisoryKind::Warning);
    }

    #[test]
    fn test_prefer_common_branch() {
        let table = SymbolTable::standard();
        let normalized = normalize("no2", &table, &PolicyKind::CaseAware);
        assert_eq!(normalized.canonical, "NO2");
        assert_eq!(normalized.advisories[0].kind, AdvisoryKind::Ambiguous);
        assert_eq!(normalized.advisories[0].resolved, "N");
        assert_eq!(normalized.advisories[1], Advisory::autocorrected("o", "O"));

        assert_eq!(normalize("co", &table, &PreferCommon::default()).canonical, "CO");
        assert_eq!(normalize("Co", &table, &PreferCommon::default()).canonical, "CO");
    }

    #[test]
    fn test_lowercase_then_uppercase_pair() {
        let table = SymbolTable::standard();

        let silicon = normalize("sI", &table, &PolicyKind::CaseAware);
        assert_eq!(silicon.canonical, "Si");
        assert_eq!(silicon.advisories.len(), 1);
        assert_eq!(silicon.advisories[0].kind, AdvisoryKind::Ambiguous);
        assert_eq!(silicon.advisories[0].resolved, "Si");

        let dioxide = normalize("nO2", &table, &PolicyKind::CaseAware);
        assert_eq!(dioxide.canonical, "NO2");
        assert_eq!(dioxide.advisories.len(), 1);
        assert_eq!(dioxide.advisories[0].kind, AdvisoryKind::Ambiguous);
        assert_eq!(dioxide.advisories[0].resolved, "N");
    }

    #[test]
    fn test_prefer_longest_branch() {
        let table = SymbolTable::standard();
        let normalized = normalize("NO2", &table, &PreferLongest);
        assert_eq!(normalized.canonical, "No2");
        assert_eq!(normalized.advisories.len(), 1);
        assert_eq!(normalized.advisories[0].kind, AdvisoryKind::Ambiguous);
    }

    #[test]
    fn test_one_letter_reading_needs_a_continuation() {
        // "L" cannot start a symbol, so only Cl is possible
        let normalized = normalize("cl2", &SymbolTable::standard(), &PolicyKind::CaseAware);
        assert_eq!(normalized.canonical, "Cl2");
        assert_eq!(normalized.advisories, vec![Advisory::autocorrected("cl", "Cl")]);
    }
}
