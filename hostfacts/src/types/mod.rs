//! Fact and report types

mod facts;
mod field;
mod report;

pub use facts::*;
pub use field::*;
pub use report::*;
