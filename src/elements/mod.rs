pub mod periodic_table;
pub mod symbol_table;

pub use periodic_table::*;
pub use symbol_table::*;
