//! Execute (EX) stage: ALU, operand forwarding, control-hazard resolution.

use crate::core::pipeline::hazards::{self, ForwardSource};
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::core::Core;
use crate::isa::abi;
use crate::soc::traits::MemoryPort;

/// Cycle-boundary snapshot of the latches the forwarding unit reads.
///
/// Captured before any stage runs, because MEM and WB rewrite these latches
/// in place earlier in the same cycle.
#[derive(Clone, Copy)]
pub struct ForwardFrame {
    /// EX/MEM as of the cycle boundary (the youngest in-flight writer).
    pub ex_mem: ExMem,
    /// MEM/WB as of the cycle boundary.
    pub mem_wb: MemWb,
}

/// Executes the instruction in ID/EX and populates EX/MEM.
///
/// Operand selection with forwarding:
/// * operand 1 is shamt under `shift`, else the forwarded rs value;
/// * operand 2 is the immediate under `alu_src`, else the forwarded rt value;
/// * the store-data path takes the forwarded rt value regardless of
///   `alu_src`, since a store's ALU consumes the immediate as the address
///   offset while rt still supplies the payload.
///
/// Branches resolve here: a taken branch or jump redirects the fetch
/// pointer, rewrites this instruction's `pc_commit`, and flushes IF/ID and
/// ID/EX.
pub fn run<M: MemoryPort>(core: &mut Core<M>, frame: &ForwardFrame) {
    if !core.id_ex.valid {
        return;
    }
    let ex = core.id_ex;

    let rs_val = hazards::forward_value(ex.rs, ex.read_data_1, &frame.ex_mem, &frame.mem_wb);
    let rt_val = hazards::forward_value(ex.rt, ex.read_data_2, &frame.ex_mem, &frame.mem_wb);

    if core.trace {
        for (reg, sel) in [
            (ex.rs, hazards::select_forward(ex.rs, &frame.ex_mem, &frame.mem_wb)),
            (ex.rt, hazards::select_forward(ex.rt, &frame.ex_mem, &frame.mem_wb)),
        ] {
            match sel {
                ForwardSource::ExMem => eprintln!("EX  forward {} from EX/MEM", abi::name(reg)),
                ForwardSource::MemWb => eprintln!("EX  forward {} from MEM/WB", abi::name(reg)),
                ForwardSource::Register => {}
            }
        }
    }

    let op1 = if ex.ctrl.shift { ex.shamt } else { rs_val };
    let op2 = if ex.ctrl.alu_src { ex.imm } else { rt_val };

    core.alu
        .generate_control_inputs(ex.ctrl.alu_op, ex.funct, ex.opcode);
    let (mut alu_result, zero) = core.alu.execute(op1, op2);

    // Link path: R31 receives the address of the instruction after the jal.
    // Routing it through the ALU result slot keeps the forwarding paths and
    // the eventual writeback in agreement.
    if ex.ctrl.link {
        alu_result = ex.pc_plus_4;
    }

    let write_reg = if ex.ctrl.link {
        abi::REG_RA
    } else if ex.ctrl.reg_dest {
        ex.rd
    } else {
        ex.rt
    };

    let branch_target = ex.pc_plus_4.wrapping_add(ex.imm << 2);
    let jump_target = (ex.pc_plus_4 & 0xF000_0000) | (ex.jaddr << 2);

    let take_branch =
        (ex.ctrl.branch && !ex.ctrl.bne && zero) || (ex.ctrl.branch && ex.ctrl.bne && !zero);

    let mut pc_commit = ex.pc_plus_4;
    if take_branch {
        pc_commit = branch_target;
        redirect(core, branch_target, "branch taken");
        core.stats.branches_taken += 1;
    } else if ex.ctrl.jump {
        pc_commit = jump_target;
        redirect(core, jump_target, "jump");
    } else if ex.ctrl.jump_reg {
        pc_commit = op1;
        redirect(core, op1, "jump register");
    }

    core.ex_mem = ExMem {
        valid: true,
        reg_write: ex.ctrl.reg_write,
        mem_to_reg: ex.ctrl.mem_to_reg,
        link: ex.ctrl.link,
        halfword: ex.ctrl.halfword,
        byte: ex.ctrl.byte,
        sign_extend_load: ex.ctrl.sign_extend_load,
        mem_read: ex.ctrl.mem_read,
        mem_write: ex.ctrl.mem_write,
        alu_result,
        write_data: rt_val,
        write_reg,
        pc_commit,
        zero,
    };

    core.id_ex.valid = false;
}

/// Redirects the fetch pointer and flushes the speculatively fetched
/// instructions in IF/ID and ID/EX.
fn redirect<M: MemoryPort>(core: &mut Core<M>, target: u32, why: &str) {
    if core.trace {
        eprintln!("EX  {} -> {:#010x}", why, target);
    }
    core.fetch_pc = target;
    core.if_id.valid = false;
    core.id_ex.valid = false;
    core.stats.flushes += 1;
}
