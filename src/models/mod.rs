//! Core data models: input tables and derived datasets.

mod aggregate;
mod density;
mod records;
mod report;
mod share;
mod trend;

pub use aggregate::*;
pub use density::*;
pub use records::*;
pub use report::*;
pub use share::*;
pub use trend::*;
