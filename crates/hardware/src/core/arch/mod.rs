//! Architectural state owned by the core.

/// General-purpose register file and committed PC.
pub mod gpr;

pub use gpr::RegisterFile;
