//! Pipeline latch structures for inter-stage communication.
//!
//! Each latch is a plain record with a `valid` flag; `valid == false` is a
//! hole in the pipeline and contributes no effects downstream. The stage
//! upstream of a latch writes it, the stage downstream reads it and clears
//! `valid` once the payload is consumed.

use crate::core::pipeline::signals::ControlSignals;

/// IF/ID latch: the fetched instruction and its sequential successor PC.
#[derive(Clone, Copy, Debug, Default)]
pub struct IfId {
    /// Whether the latch holds a fetched instruction.
    pub valid: bool,
    /// Raw instruction word.
    pub instruction: u32,
    /// Address of the next sequential instruction.
    pub pc_plus_4: u32,
}

/// ID/EX latch: decoded fields, control word, and register operands.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdEx {
    /// Whether the latch holds a decoded instruction (or a bubble).
    pub valid: bool,
    /// Control word produced by the decoder.
    pub ctrl: ControlSignals,
    /// Address of the next sequential instruction.
    pub pc_plus_4: u32,
    /// Register file value for rs.
    pub read_data_1: u32,
    /// Register file value for rt.
    pub read_data_2: u32,
    /// Immediate, already sign- or zero-extended to 32 bits.
    pub imm: u32,
    /// Raw 26-bit jump address field.
    pub jaddr: u32,
    /// First source register index.
    pub rs: usize,
    /// Second source register index.
    pub rt: usize,
    /// R-format destination register index.
    pub rd: usize,
    /// Primary opcode, saved for ALU control generation.
    pub opcode: u32,
    /// R-format function code, saved for ALU control generation.
    pub funct: u32,
    /// Shift amount.
    pub shamt: u32,
}

impl IdEx {
    /// Builds a bubble: valid but inert, with every control signal cleared.
    ///
    /// The bubble carries the `pc_commit` of the instruction it shadows so
    /// that retiring it re-commits an already-committed PC instead of
    /// clobbering the architectural PC.
    pub fn bubble(pc_commit: u32) -> Self {
        Self {
            valid: true,
            pc_plus_4: pc_commit,
            ..Self::default()
        }
    }
}

/// EX/MEM latch: ALU result, store payload, and MEM/WB-relevant control.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMem {
    /// Whether the latch holds an executed instruction.
    pub valid: bool,
    /// The instruction writes a register in WB.
    pub reg_write: bool,
    /// WB takes its value from memory rather than the ALU.
    pub mem_to_reg: bool,
    /// The destination is the link register; `alu_result` holds the link
    /// address.
    pub link: bool,
    /// Memory access is halfword-sized.
    pub halfword: bool,
    /// Memory access is byte-sized.
    pub byte: bool,
    /// Sign-extend a halfword/byte load after masking.
    pub sign_extend_load: bool,
    /// The instruction reads memory.
    pub mem_read: bool,
    /// The instruction writes memory.
    pub mem_write: bool,
    /// ALU result (memory address for loads/stores, link address for `jal`).
    pub alu_result: u32,
    /// Store payload, already forwarded.
    pub write_data: u32,
    /// Destination register index.
    pub write_reg: usize,
    /// The PC to retire when this instruction reaches WB.
    pub pc_commit: u32,
    /// ALU zero flag at execute time.
    pub zero: bool,
}

/// MEM/WB latch: the values WB selects between, plus WB control.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWb {
    /// Whether the latch holds a retiring instruction.
    pub valid: bool,
    /// The instruction writes a register.
    pub reg_write: bool,
    /// WB takes its value from memory rather than the ALU.
    pub mem_to_reg: bool,
    /// The destination is the link register.
    pub link: bool,
    /// ALU result (or link address for `jal`).
    pub alu_result: u32,
    /// Load data, already masked and sign-extended per the load type.
    pub mem_read_data: u32,
    /// Destination register index.
    pub write_reg: usize,
    /// The PC this instruction commits.
    pub pc_commit: u32,
}
