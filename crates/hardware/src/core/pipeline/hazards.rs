//! Data hazard detection and operand forwarding.
//!
//! This module keeps the pipeline coherent across data dependencies:
//! 1. **Hazard detection:** identifies load-use hazards that need a one-cycle
//!    stall, because a load's data is not available until MEM completes.
//! 2. **Operand forwarding:** resolves every other Read-After-Write hazard by
//!    bypassing the register file with a younger in-flight result.
//!
//! Both are pure functions of the cycle-boundary latch snapshot. The stages
//! rewrite the latches in place as the cycle executes, so the caller captures
//! the EX/MEM and MEM/WB state (and the load-use decision) before running any
//! stage, and hands the snapshot to the execute stage.

use crate::core::pipeline::latches::{ExMem, IdEx, MemWb};
use crate::isa::InstFields;

/// Where an execute-stage operand comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardSource {
    /// Forward the ALU result sitting in EX/MEM (youngest writer).
    ExMem,
    /// Forward the value retiring through MEM/WB.
    MemWb,
    /// No in-flight writer; use the value read from the register file.
    Register,
}

/// Checks whether decoding `consumer` this cycle requires a load-use stall.
///
/// A stall is required when the instruction ahead of the consumer is a valid
/// load whose destination (its rt field, nonzero) matches either source
/// register of the consumer. The loaded value only becomes forwardable once
/// the load reaches MEM/WB, one cycle too late for a back-to-back consumer.
pub fn load_use_stall(id_ex: &IdEx, consumer: &InstFields) -> bool {
    id_ex.valid
        && id_ex.ctrl.mem_read
        && id_ex.rt != 0
        && (id_ex.rt == consumer.rs || id_ex.rt == consumer.rt)
}

/// Selects the freshest source for one operand register.
///
/// Priority: EX/MEM over MEM/WB over the register file, and never for R0.
/// EX/MEM is preferred because it holds the younger of the two in-flight
/// writers; at most one in-flight instruction targets a given register per
/// priority level by construction.
pub fn select_forward(src: usize, ex_mem: &ExMem, mem_wb: &MemWb) -> ForwardSource {
    if src != 0 {
        if ex_mem.valid && ex_mem.reg_write && ex_mem.write_reg == src {
            return ForwardSource::ExMem;
        }
        if mem_wb.valid && mem_wb.reg_write && mem_wb.write_reg == src {
            return ForwardSource::MemWb;
        }
    }
    ForwardSource::Register
}

/// Resolves one operand, applying the forwarding priority.
///
/// `reg_value` is the value read from the register file in ID and is used
/// when no in-flight writer matches. The EX/MEM path forwards the ALU result
/// (a load never sits there relative to a consumer in EX, because the
/// load-use stall separates them); the MEM/WB path forwards load data when
/// the producer was a load, otherwise its ALU result.
pub fn forward_value(src: usize, reg_value: u32, ex_mem: &ExMem, mem_wb: &MemWb) -> u32 {
    match select_forward(src, ex_mem, mem_wb) {
        ForwardSource::ExMem => ex_mem.alu_result,
        ForwardSource::MemWb => {
            if mem_wb.mem_to_reg {
                mem_wb.mem_read_data
            } else {
                mem_wb.alu_result
            }
        }
        ForwardSource::Register => reg_value,
    }
}
