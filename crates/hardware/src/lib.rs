//! MIPS-I system simulator library.
//!
//! This crate implements a cycle-accurate functional simulator for a 32-bit
//! MIPS-I core with the following:
//! 1. **Core:** Five-stage in-order pipeline (fetch, decode, execute, memory,
//!    writeback) with hazard detection, operand forwarding, structural stalls
//!    on a non-ideal memory, and flushes on taken control transfers.
//! 2. **Reference model:** A single-cycle implementation of the same ISA used
//!    as a functional oracle for the pipeline.
//! 3. **ISA:** Decoding and execution for the MIPS-I integer subset
//!    (R-type ALU ops, immediates, loads/stores, branches, jumps).
//! 4. **SoC:** A word-addressable memory with configurable request-grant
//!    behavior, so the pipeline's stall paths are exercised realistically.
//! 5. **Simulation:** Image loader, configuration, cycle runner, and
//!    statistics collection.

/// Common helpers and error types (data masking/merging, simulator errors).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// CPU core (architectural state, pipeline, stages, ALU, execution models).
pub mod core;
/// Instruction set (field extraction, opcode/funct tables, ABI names, disasm).
pub mod isa;
/// Image loader and cycle runner.
pub mod sim;
/// Memory subsystem (word buffer, grant policies, memory port trait).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main core type; holds the register file, latches, and pipeline state.
pub use crate::core::{Core, ExecMode};
/// Word-addressable backing memory with request-grant semantics.
pub use crate::soc::memory::Memory;
/// The memory port every backing store implements.
pub use crate::soc::traits::MemoryPort;
