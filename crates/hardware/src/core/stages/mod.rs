//! Pipeline stage implementations.
//!
//! One function per stage, each operating on the shared core state. The
//! scheduling contract lives in [`crate::core::Core::advance`]: stages run in
//! reverse order (WB, MEM, EX, ID, IF) so each consumes the previous cycle's
//! state of its input latch before the upstream stage rewrites it.

/// Instruction decode and register read.
pub mod decode;
/// Execute, forwarding, and control-hazard resolution.
pub mod execute;
/// Instruction fetch.
pub mod fetch;
/// Data memory access.
pub mod memory;
/// Register writeback and PC commit.
pub mod write_back;
