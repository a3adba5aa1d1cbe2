//! Host fact readers
//!
//! Required facts (processor count, memory, kernel) return [`FactResult`]s.
//! Optional facts resolve through fallback chains and always produce a value.
//!
//! [`FactResult`]: facts_common::FactResult

pub mod board;
pub mod cpu;
pub mod disk;
pub mod distro;
pub mod kernel;
pub mod memory;
