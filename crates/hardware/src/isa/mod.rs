//! MIPS-I instruction set definitions.
//!
//! This module collects everything that is a property of the ISA rather than
//! of the machine executing it:
//! 1. **Encodings:** opcode and funct constant tables.
//! 2. **Fields:** extraction of the fixed MIPS field layout from a raw word.
//! 3. **ABI:** conventional register names for human-readable output.
//! 4. **Disassembly:** one-line rendering of instructions for traces.

/// Conventional register numbering and names.
pub mod abi;
/// Raw instruction field extraction.
pub mod decode;
/// One-line disassembly for trace output.
pub mod disasm;
/// R-type funct field constants.
pub mod funct;
/// Primary opcode constants.
pub mod opcodes;

pub use decode::InstFields;
