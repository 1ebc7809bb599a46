//! Memory stage tests against the scriptable memory port.
//!
//! These drive the full pipelined core over `ScriptedMemory` so denial
//! scripts hit the real MEM retry path.

use mips_core::core::{Core, ExecMode};

use crate::common::builder::instruction as asm;
use crate::common::mocks::memory::ScriptedMemory;

fn core_with_program(program: &[u32]) -> Core<ScriptedMemory> {
    let mut mem = ScriptedMemory::new(64 * 1024);
    for (i, inst) in program.iter().enumerate() {
        mem.write_word(i as u32 * 4, *inst);
    }
    let mut core = Core::new(mem);
    core.initialize(ExecMode::Pipelined);
    core
}

#[test]
fn partial_store_merges_into_current_word() {
    let mut core = core_with_program(&[
        asm::addi(1, 0, 0x100),
        asm::addi(2, 0, 0x7A),
        asm::sh(2, 0, 1),
    ]);
    core.memory.write_word(0x100, 0xDEAD_BEEF);

    for _ in 0..20 {
        core.advance();
    }

    assert_eq!(
        core.memory.read_word(0x100),
        0xDEAD_007A,
        "sh must keep the upper halfword of the existing word"
    );

    // The partial store is a read-merge-write pair at word granularity.
    let store_requests: Vec<_> = core.memory.log.iter().filter(|r| r.addr == 0x100).collect();
    assert!(store_requests.iter().any(|r| r.do_read && r.granted));
    assert!(store_requests.iter().any(|r| r.do_write && r.granted));
}

#[test]
fn byte_store_keeps_upper_bytes() {
    let mut core = core_with_program(&[
        asm::addi(1, 0, 0x100),
        asm::addi(2, 0, 0x42),
        asm::sb(2, 0, 1),
    ]);
    core.memory.write_word(0x100, 0x1111_1111);

    for _ in 0..20 {
        core.advance();
    }

    assert_eq!(core.memory.read_word(0x100), 0x1111_1142);
}

#[test]
fn store_write_denial_retries_without_partial_effects() {
    let mut core = core_with_program(&[
        asm::addi(1, 0, 0x100),
        asm::addi(2, 0, 0x7A),
        asm::sh(2, 0, 1),
    ]);
    core.memory.write_word(0x100, 0xDEAD_BEEF);

    // Let the store reach EX/MEM, then deny its write request (the second
    // request of the read-merge-write pair) once.
    for _ in 0..5 {
        core.advance();
    }
    // This cycle MEM issues the read (granted) then the write (denied).
    core.memory.script_grants(&[true, false]);
    core.advance();
    assert_eq!(
        core.memory.read_word(0x100),
        0xDEAD_BEEF,
        "a denied write must leave memory untouched"
    );
    assert_eq!(core.stats.stalls_mem, 1);

    // The whole read-merge-write pair re-executes and completes.
    for _ in 0..10 {
        core.advance();
    }
    assert_eq!(core.memory.read_word(0x100), 0xDEAD_007A);
}

#[test]
fn load_denial_stalls_younger_stages() {
    let mut core = core_with_program(&[
        asm::addi(1, 0, 0x100),
        asm::lw(2, 0, 1),
        asm::addi(3, 0, 7),
        asm::addi(4, 0, 8),
    ]);
    core.memory.write_word(0x100, 0x42);

    // Cycle 5 is the lw's MEM cycle under an ideal memory; deny its read
    // and confirm the cycle makes no progress past WB.
    for _ in 0..4 {
        core.advance();
    }
    let if_id_before = core.if_id;
    let id_ex_before = core.id_ex;
    core.memory.script_grants(&[false]);
    core.advance();

    assert_eq!(core.stats.stalls_mem, 1);
    assert!(core.ex_mem.valid, "EX/MEM must be preserved for retry");
    assert_eq!(core.if_id.valid, if_id_before.valid);
    assert_eq!(core.if_id.instruction, if_id_before.instruction);
    assert_eq!(core.id_ex.rt, id_ex_before.rt);

    for _ in 0..10 {
        core.advance();
    }
    assert_eq!(core.regs.read(2), 0x42, "the load completes after retry");
    assert_eq!(core.regs.read(3), 7);
    assert_eq!(core.regs.read(4), 8);
}

#[test]
fn signed_and_unsigned_partial_loads() {
    let mut core = core_with_program(&[
        asm::addi(1, 0, 0x100),
        asm::lb(2, 0, 1),
        asm::lbu(3, 0, 1),
        asm::lh(4, 0, 1),
        asm::lhu(5, 0, 1),
    ]);
    core.memory.write_word(0x100, 0x0000_8080);

    for _ in 0..30 {
        core.advance();
    }

    assert_eq!(core.regs.read(2), 0xFFFF_FF80, "lb sign-extends");
    assert_eq!(core.regs.read(3), 0x80, "lbu masks only");
    assert_eq!(core.regs.read(4), 0xFFFF_8080, "lh sign-extends");
    assert_eq!(core.regs.read(5), 0x8080, "lhu masks only");
}
