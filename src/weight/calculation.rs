//! The full pipeline from raw input to a weighed formula
//!
//! Each hydrate part is parsed and weighed on its own. A part that fails keeps
//! its error and contributes nothing to the total; the other parts are still
//! reported.

use log::{debug, info, warn};

use super::aggregate::{aggregate, Breakdown};
use crate::elements::SymbolTable;
use crate::error::FormulaError;
use crate::formula::{normalize, parse, split_hydrates, Advisory, AtomCount, DisambiguationPolicy};

/// One hydrate part and how it went
#[derive(Debug, Clone, PartialEq)]
pub struct SubFormula {
    pub text: String,
    pub outcome: Result<Breakdown, FormulaError>,
}

impl SubFormula {
    pub fn subtotal(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(|breakdown| breakdown.subtotal)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub input: String,
    pub canonical: String,
    pub advisories: Vec<Advisory>,
    pub parts: Vec<SubFormula>,
    pub total: f64,
}

impl Calculation {
    /// True when every part parsed and there was at least one part
    pub fn is_complete(&self) -> bool {
        !self.parts.is_empty() && self.parts.iter().all(|part| part.outcome.is_ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = (&str, &FormulaError)> + '_ {
        self.parts
            .iter()
            .filter_map(|part| part.outcome.as_ref().err().map(|err| (part.text.as_str(), err)))
    }

    /// Element counts of all successful parts merged together, or `None` when
    /// a merged count does not fit in a `u64`
    pub fn composition(&self) -> Option<AtomCount> {
        let mut combined = AtomCount::new();
        for part in &self.parts {
            if let Ok(breakdown) = &part.outcome {
                for row in &breakdown.rows {
                    if combined.add(&row.symbol, row.count).is_none() {
                        warn!("Atom count for {} overflowed while merging parts", row.symbol);
                        return None;
                    }
                }
            }
        }
        Some(combined)
    }

    /// Share of the total weight contributed by each element, in percent
    pub fn mass_percentages(&self) -> Vec<(String, f64)> {
        let mut shares: Vec<(String, f64)> = Vec::new();
        for part in &self.parts {
            if let Ok(breakdown) = &part.outcome {
                for row in &breakdown.rows {
                    match shares.iter_mut().find(|(symbol, _)| *symbol == row.symbol) {
                        Some((_, weight)) => *weight += row.line_weight,
                        None => shares.push((row.symbol.clone(), row.line_weight)),
                    }
                }
            }
        }

        if self.total > 0.0 {
            for (_, weight) in shares.iter_mut() {
                *weight = *weight / self.total * 100.0;
            }
        } else {
            shares.iter_mut().for_each(|(_, weight)| *weight = 0.0);
        }
        shares
    }
}

/// Normalize, split, parse and weigh `raw`
pub fn calculate(raw: &str, table: &SymbolTable, policy: &dyn DisambiguationPolicy) -> Calculation {
    let normalized = normalize(raw, table, policy);
    let mut parts = Vec::new();
    let mut total = 0.0;

    for text in split_hydrates(&normalized.canonical) {
        let outcome = parse(text, table)
            .map_err(FormulaError::from)
            .and_then(|counts| aggregate(&counts, table));

        match &outcome {
            Ok(breakdown) => {
                debug!("Part {text:?} weighs {:.4} g/mol", breakdown.subtotal);
                total += breakdown.subtotal;
            }
            Err(e) => warn!("Part {text:?} failed: {e}"),
        }

        parts.push(SubFormula {
            text: text.to_string(),
            outcome,
        });
    }

    info!(
        "Calculated {raw:?} as {:?}: {} parts, total {total:.4} g/mol",
        normalized.canonical,
        parts.len()
    );

    Calculation {
        input: raw.to_string(),
        canonical: normalized.canonical,
        advisories: normalized.advisories,
        parts,
        total,
    }
}
