//! Parser for canonical sub-formulas
//!
//! Grammar, over ASCII:
//!
//! ```text
//! formula := coefficient? item*
//! item    := element count? | "(" item* ")" count?
//! element := [A-Z] [a-z]?
//! count   := [0-9]+
//! ```
//!
//! A leading coefficient multiplies the whole sub-formula, which is how the
//! water part of a hydrate is written (`5H2O`). Groups are tracked with an
//! explicit stack of frames rather than recursion.

use log::trace;

use super::atom_count::AtomCount;
use crate::elements::SymbolTable;
use crate::error::ParseError;

/// Parse one sub-formula into its flattened element counts
pub fn parse(formula: &str, table: &SymbolTable) -> Result<AtomCount, ParseError> {
    let bytes = formula.as_bytes();
    let mut i = 0;

    let coefficient_end = scan_digits(bytes, 0);
    let coefficient = if coefficient_end > 0 {
        if coefficient_end == bytes.len() {
            return Err(ParseError::InvalidSyntax {
                remainder: formula.to_string(),
                position: 0,
            });
        }
        i = coefficient_end;
        Some(parse_count(formula, 0, coefficient_end)?)
    } else {
        None
    };

    // enclosing frames, each with the position of the `(` that opened it
    let mut stack: Vec<(usize, AtomCount)> = Vec::new();
    let mut current = AtomCount::new();

    while i < bytes.len() {
        match bytes[i] {
            b'(' => {
                trace!("Opening group at {i}, depth {}", stack.len() + 1);
                stack.push((i, std::mem::take(&mut current)));
                i += 1;
            }
            b')' => {
                let close = i;
                let digits_end = scan_digits(bytes, i + 1);
                let multiplier = if digits_end > i + 1 {
                    parse_count(formula, i + 1, digits_end)?
                } else {
                    1
                };
                let (_, mut outer) = stack
                    .pop()
                    .ok_or(ParseError::UnmatchedClose { position: close })?;
                outer
                    .merge_scaled(&current, multiplier)
                    .ok_or(ParseError::CountOverflow { position: close })?;
                trace!("Closed group at {close} with multiplier {multiplier}");
                current = outer;
                i = digits_end;
            }
            b if b.is_ascii_uppercase() => {
                let mut letters_end = i + 1;
                if letters_end < bytes.len() && bytes[letters_end].is_ascii_lowercase() {
                    letters_end += 1;
                }
                let symbol = &formula[i..letters_end];
                let element = table.get(symbol).ok_or_else(|| ParseError::UnknownSymbol {
                    symbol: symbol.to_string(),
                    position: i,
                })?;

                let digits_end = scan_digits(bytes, letters_end);
                let count = if digits_end > letters_end {
                    parse_count(formula, letters_end, digits_end)?
                } else {
                    1
                };
                current
                    .add(element.symbol, count)
                    .ok_or(ParseError::CountOverflow { position: i })?;
                i = digits_end;
            }
            _ => {
                return Err(ParseError::InvalidSyntax {
                    remainder: formula[i..].to_string(),
                    position: i,
                });
            }
        }
    }

    if let Some((open, _)) = stack.last() {
        return Err(ParseError::UnclosedGroup { position: *open });
    }

    match coefficient {
        Some(factor) => current
            .scaled(factor)
            .ok_or(ParseError::CountOverflow { position: 0 }),
        None => Ok(current),
    }
}

/// End of the run of ASCII digits starting at `start`
fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

fn parse_count(formula: &str, start: usize, end: usize) -> Result<u64, ParseError> {
    formula[start..end]
        .parse()
        .map_err(|_| ParseError::CountOverflow { position: start })
}
