//! Register writeback (WB) stage.

use crate::core::Core;
use crate::isa::abi;
use crate::soc::traits::MemoryPort;

/// Retires the instruction in MEM/WB.
///
/// Selects the writeback value, writes the register file through its single
/// write port (R0 writes are suppressed by the port), and commits the
/// architectural PC from `pc_commit`. Every valid payload counts as one
/// commit, bubbles included: a bubble's `pc_commit` repeats the previous
/// instruction's, so retiring it has no architectural effect.
pub fn run<M: MemoryPort>(core: &mut Core<M>) {
    if !core.mem_wb.valid {
        return;
    }
    let wb = core.mem_wb;

    let write_data = if wb.link {
        // Link address, routed through the ALU result slot by EX.
        wb.alu_result
    } else if wb.mem_to_reg {
        wb.mem_read_data
    } else {
        wb.alu_result
    };

    if wb.reg_write && core.trace {
        eprintln!(
            "WB  {} <- {:#010x} (pc {:#010x})",
            abi::name(wb.write_reg),
            write_data,
            wb.pc_commit
        );
    }

    core.regs
        .access(0, 0, wb.write_reg, wb.reg_write, write_data);
    core.regs.pc = wb.pc_commit;
    core.stats.instructions_retired += 1;

    core.mem_wb.valid = false;
}
