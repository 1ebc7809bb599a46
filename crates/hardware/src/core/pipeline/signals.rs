//! Pipeline control signals and the decoding table.
//!
//! One `ControlSignals` record travels with every instruction in flight and
//! steers each stage it passes through. `ControlSignals::decode` is the
//! control unit: it implements the dense opcode table for the supported
//! MIPS-I subset. Unrecognized opcodes decode to the inert default record,
//! so they flow through the pipeline as no-ops that still commit their PC.

use crate::isa::{funct, opcodes, InstFields};

/// The 2-bit ALU operation selector carried in the control word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Address arithmetic: the ALU adds (loads, stores, jumps).
    #[default]
    Add,
    /// Branch comparison: the ALU subtracts and the zero flag decides.
    Branch,
    /// R-type: the ALU dispatches on the funct field.
    Funct,
    /// Immediate ALU ops: the ALU dispatches on the opcode.
    Imm,
}

/// Control signals for one instruction in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Destination register comes from the rd field (R-type) rather than rt.
    pub reg_dest: bool,
    /// ALU operand 2 is the extended immediate rather than the rt value.
    pub alu_src: bool,
    /// The instruction writes a register in WB.
    pub reg_write: bool,
    /// The instruction reads memory in MEM.
    pub mem_read: bool,
    /// The instruction writes memory in MEM.
    pub mem_write: bool,
    /// WB takes its value from memory rather than the ALU.
    pub mem_to_reg: bool,
    /// Conditional branch, resolved in EX.
    pub branch: bool,
    /// The branch condition is not-equal rather than equal.
    pub bne: bool,
    /// Unconditional jump to the 26-bit target.
    pub jump: bool,
    /// Unconditional jump to the rs register value.
    pub jump_reg: bool,
    /// The instruction links: the destination is R31.
    pub link: bool,
    /// ALU operand 1 is the shamt field rather than the rs value.
    pub shift: bool,
    /// Zero-extend the immediate instead of sign-extending it.
    pub zero_extend: bool,
    /// The memory access is halfword-sized.
    pub halfword: bool,
    /// The memory access is byte-sized.
    pub byte: bool,
    /// Sign-extend a halfword/byte load after masking (`lb`/`lh`).
    pub sign_extend_load: bool,
    /// ALU operation selector.
    pub alu_op: AluOp,
}

impl ControlSignals {
    /// Decodes the control word for an instruction.
    ///
    /// At most one of `branch`, `jump`, `jump_reg` is set per instruction,
    /// and `link` implies the destination register is 31.
    pub fn decode(raw: u32) -> Self {
        let f = InstFields::decode(raw);
        let mut c = ControlSignals::default();

        match f.opcode {
            opcodes::OP_RTYPE => {
                c.reg_dest = true;
                c.reg_write = true;
                c.alu_op = AluOp::Funct;
                match f.funct {
                    funct::SLL | funct::SRL | funct::SRA => c.shift = true,
                    funct::JR => {
                        c.jump_reg = true;
                        c.reg_write = false;
                    }
                    _ => {}
                }
            }
            opcodes::OP_ADDI | opcodes::OP_ADDIU | opcodes::OP_SLTI | opcodes::OP_SLTIU => {
                c.alu_src = true;
                c.reg_write = true;
                c.alu_op = AluOp::Imm;
            }
            opcodes::OP_ANDI | opcodes::OP_ORI | opcodes::OP_XORI | opcodes::OP_LUI => {
                c.alu_src = true;
                c.reg_write = true;
                c.zero_extend = true;
                c.alu_op = AluOp::Imm;
            }
            opcodes::OP_LW | opcodes::OP_LH | opcodes::OP_LHU | opcodes::OP_LB | opcodes::OP_LBU => {
                c.alu_src = true;
                c.mem_read = true;
                c.mem_to_reg = true;
                c.reg_write = true;
                c.halfword = matches!(f.opcode, opcodes::OP_LH | opcodes::OP_LHU);
                c.byte = matches!(f.opcode, opcodes::OP_LB | opcodes::OP_LBU);
                c.sign_extend_load = matches!(f.opcode, opcodes::OP_LH | opcodes::OP_LB);
            }
            opcodes::OP_SW | opcodes::OP_SH | opcodes::OP_SB => {
                c.alu_src = true;
                c.mem_write = true;
                c.halfword = f.opcode == opcodes::OP_SH;
                c.byte = f.opcode == opcodes::OP_SB;
            }
            opcodes::OP_BEQ => {
                c.branch = true;
                c.alu_op = AluOp::Branch;
            }
            opcodes::OP_BNE => {
                c.branch = true;
                c.bne = true;
                c.alu_op = AluOp::Branch;
            }
            opcodes::OP_J => {
                c.jump = true;
            }
            opcodes::OP_JAL => {
                c.jump = true;
                c.link = true;
                c.reg_write = true;
            }
            // Unrecognized opcode: leave the record inert so the
            // instruction flows through as a no-op.
            _ => {}
        }

        c
    }

    /// True when no side-effecting signal is set.
    ///
    /// A bubble satisfies this; so does a decoded unknown opcode.
    pub fn is_inert(&self) -> bool {
        !(self.reg_write
            || self.mem_read
            || self.mem_write
            || self.branch
            || self.jump
            || self.jump_reg)
    }
}
