//! Instruction decode (ID) stage.

use crate::common::data;
use crate::core::pipeline::signals::ControlSignals;
use crate::core::Core;
use crate::isa::{abi, InstFields};
use crate::soc::traits::MemoryPort;

/// Decodes the instruction in IF/ID and populates ID/EX.
///
/// The load-use hazard decision is made by the caller against the
/// cycle-boundary snapshot; when a stall is required this stage does not run
/// at all and a bubble is injected into ID/EX instead, leaving IF/ID (and
/// the fetch pointer) unchanged so the instruction is re-decoded next cycle.
pub fn run<M: MemoryPort>(core: &mut Core<M>) {
    if !core.if_id.valid {
        return;
    }

    let f = InstFields::decode(core.if_id.instruction);
    let ctrl = ControlSignals::decode(core.if_id.instruction);

    let imm = if ctrl.zero_extend {
        f.imm
    } else {
        data::sign_extend_half(f.imm)
    };

    let (read_data_1, read_data_2) = core.regs.access(f.rs, f.rt, 0, false, 0);

    if core.trace {
        eprintln!(
            "ID  pc={:#010x} rs={}={:#x} rt={}={:#x} imm={:#x}",
            core.if_id.pc_plus_4.wrapping_sub(4),
            abi::name(f.rs),
            read_data_1,
            abi::name(f.rt),
            read_data_2,
            imm
        );
    }

    core.id_ex.valid = true;
    core.id_ex.ctrl = ctrl;
    core.id_ex.pc_plus_4 = core.if_id.pc_plus_4;
    core.id_ex.read_data_1 = read_data_1;
    core.id_ex.read_data_2 = read_data_2;
    core.id_ex.imm = imm;
    core.id_ex.jaddr = f.jaddr;
    core.id_ex.rs = f.rs;
    core.id_ex.rt = f.rt;
    core.id_ex.rd = f.rd;
    core.id_ex.opcode = f.opcode;
    core.id_ex.funct = f.funct;
    core.id_ex.shamt = f.shamt;

    core.if_id.valid = false;
}
