//! Molweight - molecular weight calculator for chemical formulas
//!
//! Free-typed formulas such as `fe2(so4)3` or `CuSO4·5H2O` are normalized to
//! canonical element symbols, split into hydrate parts, parsed into element
//! counts and weighed against the periodic table.

pub mod app;
pub mod config;
pub mod elements;
pub mod error;
pub mod formula;
pub mod logging;
pub mod ui;
pub mod weight;

// Re-export main types for convenience
pub use app::App;
pub use elements::{Element, SymbolTable};
pub use error::{FormulaError, ParseError};
pub use weight::{calculate, Calculation};
