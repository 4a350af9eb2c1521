//! Formula text handling: normalization, hydrate splitting and parsing

pub mod advisory;
pub mod atom_count;
pub mod hydrate;
pub mod normalizer;
pub mod parser;
pub mod policy;

pub use advisory::*;
pub use atom_count::*;
pub use hydrate::*;
pub use normalizer::*;
pub use parser::*;
pub use policy::*;
