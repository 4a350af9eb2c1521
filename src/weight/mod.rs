pub mod aggregate;
pub mod calculation;

pub use aggregate::*;
pub use calculation::*;
