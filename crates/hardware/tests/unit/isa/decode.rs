//! Instruction field extraction and disassembly tests.

use mips_core::isa::disasm::disasm;
use mips_core::isa::InstFields;

use crate::common::builder::instruction as asm;

#[test]
fn field_layout() {
    // addi r3, r1, -2 => opcode 0x08, rs=1, rt=3, imm=0xFFFE
    let f = InstFields::decode(asm::addi(3, 1, -2));
    assert_eq!(f.opcode, 0x08);
    assert_eq!(f.rs, 1);
    assert_eq!(f.rt, 3);
    assert_eq!(f.imm, 0xFFFE);
    assert_eq!(f.imm_sign_extended(), 0xFFFF_FFFE);
}

#[test]
fn r_type_fields() {
    let f = InstFields::decode(asm::sll(4, 7, 12));
    assert_eq!(f.opcode, 0);
    assert_eq!(f.rd, 4);
    assert_eq!(f.rt, 7);
    assert_eq!(f.shamt, 12);
    assert_eq!(f.funct, 0);
}

#[test]
fn jump_address_field() {
    let f = InstFields::decode(asm::jal(0x0040_0000));
    assert_eq!(f.opcode, 0x03);
    assert_eq!(f.jaddr, 0x0040_0000 >> 2);
}

#[test]
fn zero_word_is_nop() {
    assert_eq!(disasm(0), "nop");
}

#[test]
fn disasm_covers_common_mnemonics() {
    assert_eq!(disasm(asm::addi(3, 1, 5)), "addi $v1, $at, 5");
    assert_eq!(disasm(asm::add(3, 1, 2)), "add $v1, $at, $v0");
    assert_eq!(disasm(asm::lw(2, 4, 1)), "lw $v0, 4($at)");
    assert_eq!(disasm(asm::jr(31)), "jr $ra");
}

#[test]
fn disasm_unknown_renders_raw_word() {
    // Opcode 0x3F is not in the table.
    let raw = 0xFC00_0000;
    assert_eq!(disasm(raw), format!(".word {:#010x}", raw));
}
