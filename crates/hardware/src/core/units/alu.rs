//! Arithmetic logic unit.
//!
//! The ALU is driven in two steps, mirroring the hardware control path:
//! `generate_control_inputs` derives the concrete operation from the 2-bit
//! `AluOp` selector plus the funct and opcode fields, then `execute` applies
//! it to the operands and reports the result together with the zero flag the
//! branch logic consumes.

use crate::core::pipeline::signals::AluOp;
use crate::isa::{funct, opcodes};

/// The concrete operation the ALU performs this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluControl {
    /// Wrapping addition (also address generation for loads/stores).
    #[default]
    Add,
    /// Wrapping subtraction (also branch comparison).
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Signed less-than compare producing 0 or 1.
    Slt,
    /// Unsigned less-than compare producing 0 or 1.
    Sltu,
    /// Logical left shift of operand 2 by operand 1.
    Sll,
    /// Logical right shift of operand 2 by operand 1.
    Srl,
    /// Arithmetic right shift of operand 2 by operand 1.
    Sra,
    /// Load upper immediate: operand 2 shifted left 16.
    Lui,
    /// Pass operand 1 through unchanged (`jr`; the result is unused).
    Pass,
}

/// The arithmetic logic unit.
#[derive(Default)]
pub struct Alu {
    control: AluControl,
}

impl Alu {
    /// Creates an ALU with the control input parked on `Add`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The operation currently selected.
    pub fn control(&self) -> AluControl {
        self.control
    }

    /// Derives the concrete operation from the decoded control inputs.
    ///
    /// R-type instructions dispatch on `funct`; immediate-format ALU
    /// instructions dispatch on `opcode`. The `Add` and `Branch` selectors
    /// need no further dispatch.
    pub fn generate_control_inputs(&mut self, alu_op: AluOp, funct_field: u32, opcode: u32) {
        self.control = match alu_op {
            AluOp::Add => AluControl::Add,
            AluOp::Branch => AluControl::Sub,
            AluOp::Funct => match funct_field {
                funct::SLL => AluControl::Sll,
                funct::SRL => AluControl::Srl,
                funct::SRA => AluControl::Sra,
                funct::JR => AluControl::Pass,
                funct::ADD | funct::ADDU => AluControl::Add,
                funct::SUB | funct::SUBU => AluControl::Sub,
                funct::AND => AluControl::And,
                funct::OR => AluControl::Or,
                funct::XOR => AluControl::Xor,
                funct::NOR => AluControl::Nor,
                funct::SLT => AluControl::Slt,
                funct::SLTU => AluControl::Sltu,
                _ => AluControl::Add,
            },
            AluOp::Imm => match opcode {
                opcodes::OP_ADDI | opcodes::OP_ADDIU => AluControl::Add,
                opcodes::OP_SLTI => AluControl::Slt,
                opcodes::OP_SLTIU => AluControl::Sltu,
                opcodes::OP_ANDI => AluControl::And,
                opcodes::OP_ORI => AluControl::Or,
                opcodes::OP_XORI => AluControl::Xor,
                opcodes::OP_LUI => AluControl::Lui,
                _ => AluControl::Add,
            },
        };
    }

    /// Executes the selected operation.
    ///
    /// # Returns
    ///
    /// `(result, zero)` where `zero` is true when the result is 0.
    pub fn execute(&self, op1: u32, op2: u32) -> (u32, bool) {
        let result = match self.control {
            AluControl::Add => op1.wrapping_add(op2),
            AluControl::Sub => op1.wrapping_sub(op2),
            AluControl::And => op1 & op2,
            AluControl::Or => op1 | op2,
            AluControl::Xor => op1 ^ op2,
            AluControl::Nor => !(op1 | op2),
            AluControl::Slt => ((op1 as i32) < (op2 as i32)) as u32,
            AluControl::Sltu => (op1 < op2) as u32,
            AluControl::Sll => op2 << (op1 & 0x1F),
            AluControl::Srl => op2 >> (op1 & 0x1F),
            AluControl::Sra => ((op2 as i32) >> (op1 & 0x1F)) as u32,
            AluControl::Lui => op2 << 16,
            AluControl::Pass => op1,
        };
        (result, result == 0)
    }
}
