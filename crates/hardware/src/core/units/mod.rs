//! Functional units used by the execute stage.

/// Arithmetic logic unit.
pub mod alu;

pub use alu::Alu;
