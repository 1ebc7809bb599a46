//! ALU control generation and execution tests.

use mips_core::core::pipeline::signals::AluOp;
use mips_core::core::units::alu::AluControl;
use mips_core::core::units::Alu;
use mips_core::isa::{funct, opcodes};

fn control_for(alu_op: AluOp, fn_code: u32, opcode: u32) -> AluControl {
    let mut alu = Alu::new();
    alu.generate_control_inputs(alu_op, fn_code, opcode);
    alu.control()
}

// ══════════════════════════════════════════════════════════
// 1. Control generation
// ══════════════════════════════════════════════════════════

#[test]
fn add_selector_always_adds() {
    assert_eq!(control_for(AluOp::Add, funct::SUB, opcodes::OP_LW), AluControl::Add);
}

#[test]
fn branch_selector_subtracts() {
    assert_eq!(control_for(AluOp::Branch, 0, opcodes::OP_BEQ), AluControl::Sub);
}

#[test]
fn funct_dispatch() {
    let cases = [
        (funct::ADD, AluControl::Add),
        (funct::ADDU, AluControl::Add),
        (funct::SUB, AluControl::Sub),
        (funct::SUBU, AluControl::Sub),
        (funct::AND, AluControl::And),
        (funct::OR, AluControl::Or),
        (funct::XOR, AluControl::Xor),
        (funct::NOR, AluControl::Nor),
        (funct::SLT, AluControl::Slt),
        (funct::SLTU, AluControl::Sltu),
        (funct::SLL, AluControl::Sll),
        (funct::SRL, AluControl::Srl),
        (funct::SRA, AluControl::Sra),
        (funct::JR, AluControl::Pass),
    ];
    for (fn_code, expected) in cases {
        assert_eq!(
            control_for(AluOp::Funct, fn_code, 0),
            expected,
            "funct {:#x}",
            fn_code
        );
    }
}

#[test]
fn opcode_dispatch() {
    let cases = [
        (opcodes::OP_ADDI, AluControl::Add),
        (opcodes::OP_ADDIU, AluControl::Add),
        (opcodes::OP_SLTI, AluControl::Slt),
        (opcodes::OP_SLTIU, AluControl::Sltu),
        (opcodes::OP_ANDI, AluControl::And),
        (opcodes::OP_ORI, AluControl::Or),
        (opcodes::OP_XORI, AluControl::Xor),
        (opcodes::OP_LUI, AluControl::Lui),
    ];
    for (opcode, expected) in cases {
        assert_eq!(
            control_for(AluOp::Imm, 0, opcode),
            expected,
            "opcode {:#x}",
            opcode
        );
    }
}

// ══════════════════════════════════════════════════════════
// 2. Execution
// ══════════════════════════════════════════════════════════

fn exec(alu_op: AluOp, fn_code: u32, opcode: u32, op1: u32, op2: u32) -> (u32, bool) {
    let mut alu = Alu::new();
    alu.generate_control_inputs(alu_op, fn_code, opcode);
    alu.execute(op1, op2)
}

#[test]
fn add_wraps() {
    assert_eq!(exec(AluOp::Add, 0, 0, u32::MAX, 1), (0, true));
}

#[test]
fn sub_zero_flag() {
    assert_eq!(exec(AluOp::Branch, 0, 0, 7, 7), (0, true));
    assert_eq!(exec(AluOp::Branch, 0, 0, 7, 5), (2, false));
}

#[test]
fn logic_ops() {
    assert_eq!(exec(AluOp::Funct, funct::AND, 0, 0b1100, 0b1010).0, 0b1000);
    assert_eq!(exec(AluOp::Funct, funct::OR, 0, 0b1100, 0b1010).0, 0b1110);
    assert_eq!(exec(AluOp::Funct, funct::XOR, 0, 0b1100, 0b1010).0, 0b0110);
    assert_eq!(
        exec(AluOp::Funct, funct::NOR, 0, 0xF000_0000, 0x0000_000F).0,
        0x0FFF_FFF0
    );
}

#[test]
fn slt_is_signed() {
    assert_eq!(exec(AluOp::Funct, funct::SLT, 0, (-1i32) as u32, 1).0, 1);
    assert_eq!(exec(AluOp::Funct, funct::SLTU, 0, (-1i32) as u32, 1).0, 0);
}

#[test]
fn shifts_move_operand_2_by_operand_1() {
    // Operand 1 carries the shamt; operand 2 carries the rt value.
    assert_eq!(exec(AluOp::Funct, funct::SLL, 0, 4, 0x1).0, 0x10);
    assert_eq!(exec(AluOp::Funct, funct::SRL, 0, 4, 0x8000_0000).0, 0x0800_0000);
    assert_eq!(
        exec(AluOp::Funct, funct::SRA, 0, 4, 0x8000_0000).0,
        0xF800_0000
    );
}

#[test]
fn lui_shifts_immediate() {
    assert_eq!(exec(AluOp::Imm, 0, opcodes::OP_LUI, 0, 0x1234).0, 0x1234_0000);
}
