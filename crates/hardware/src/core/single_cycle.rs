//! Single-cycle reference model.
//!
//! Performs IF, ID, EX, MEM, and WB for one instruction in a single
//! `advance()` call, with no latches and no forwarding. It is the functional
//! oracle for the pipeline: stepping this model N times must produce the
//! same architectural state as running the pipelined model until N
//! instructions commit.
//!
//! All state commits (register write, PC update) happen only after every
//! memory access has been granted; a denial anywhere aborts the call with no
//! progress, and the whole instruction re-executes on the next call. The
//! re-execution is idempotent because memory is only written by the final
//! access.

use crate::common::data;
use crate::core::pipeline::signals::ControlSignals;
use crate::core::Core;
use crate::isa::{abi, InstFields};
use crate::soc::traits::MemoryPort;

/// Executes one instruction end to end.
pub fn run<M: MemoryPort>(core: &mut Core<M>) {
    let pc = core.regs.pc;

    let Some(instruction) = core.memory.access(pc, 0, true, false) else {
        core.stats.stalls_mem += 1;
        return;
    };

    let f = InstFields::decode(instruction);
    let ctrl = ControlSignals::decode(instruction);

    let imm = if ctrl.zero_extend {
        f.imm
    } else {
        data::sign_extend_half(f.imm)
    };

    let (read_data_1, read_data_2) = core.regs.access(f.rs, f.rt, 0, false, 0);

    let op1 = if ctrl.shift { f.shamt } else { read_data_1 };
    let op2 = if ctrl.alu_src { imm } else { read_data_2 };

    core.alu.generate_control_inputs(ctrl.alu_op, f.funct, f.opcode);
    let (alu_result, zero) = core.alu.execute(op1, op2);

    let mut mem_read_data = 0;
    if ctrl.mem_write {
        let Some(current) = core.memory.access(alu_result, 0, true, false) else {
            core.stats.stalls_mem += 1;
            return;
        };
        let merged = if ctrl.halfword {
            data::merge_half(current, read_data_2)
        } else if ctrl.byte {
            data::merge_byte(current, read_data_2)
        } else {
            read_data_2
        };
        if core.memory.access(alu_result, merged, false, true).is_none() {
            core.stats.stalls_mem += 1;
            return;
        }
    } else if ctrl.mem_read {
        let Some(word) = core.memory.access(alu_result, 0, true, false) else {
            core.stats.stalls_mem += 1;
            return;
        };
        mem_read_data = if ctrl.halfword {
            if ctrl.sign_extend_load {
                data::sign_extend_half(word)
            } else {
                data::mask_half(word)
            }
        } else if ctrl.byte {
            if ctrl.sign_extend_load {
                data::sign_extend_byte(word)
            } else {
                data::mask_byte(word)
            }
        } else {
            word
        };
    }

    let pc_plus_4 = pc.wrapping_add(4);
    let branch_target = pc_plus_4.wrapping_add(imm << 2);
    let jump_target = (pc_plus_4 & 0xF000_0000) | (f.jaddr << 2);

    let take_branch = (ctrl.branch && !ctrl.bne && zero) || (ctrl.branch && ctrl.bne && !zero);

    let next_pc = if take_branch {
        branch_target
    } else if ctrl.jump {
        jump_target
    } else if ctrl.jump_reg {
        read_data_1
    } else {
        pc_plus_4
    };

    let write_reg = if ctrl.link {
        abi::REG_RA
    } else if ctrl.reg_dest {
        f.rd
    } else {
        f.rt
    };

    // Link value matches the pipeline: the address of the instruction after
    // the jal.
    let write_data = if ctrl.link {
        pc_plus_4
    } else if ctrl.mem_to_reg {
        mem_read_data
    } else {
        alu_result
    };

    if core.trace {
        eprintln!(
            "SC  pc={:#010x} inst={:#010x} next={:#010x}",
            pc, instruction, next_pc
        );
    }

    core.regs.access(0, 0, write_reg, ctrl.reg_write, write_data);
    core.regs.pc = next_pc;
    if take_branch {
        core.stats.branches_taken += 1;
    }
    core.stats.instructions_retired += 1;
}
