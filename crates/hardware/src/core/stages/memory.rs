//! Data memory access (MEM) stage.

use crate::common::data;
use crate::core::pipeline::latches::MemWb;
use crate::core::Core;
use crate::soc::traits::MemoryPort;

/// Performs the load or store for the instruction in EX/MEM.
///
/// Returns `false` when the memory denied a request; the caller must then
/// end the cycle without running EX, ID, or IF so every in-flight latch is
/// preserved for retry. Partial-word stores are a read-merge-write pair at
/// word granularity; on any denial the entire step re-executes next cycle,
/// which is safe because nothing is written until the final access.
pub fn run<M: MemoryPort>(core: &mut Core<M>) -> bool {
    if !core.ex_mem.valid {
        return true;
    }
    let m = core.ex_mem;

    let mut mem_read_data = 0;

    if m.mem_write {
        let Some(current) = core.memory.access(m.alu_result, 0, true, false) else {
            return false;
        };
        let merged = if m.halfword {
            data::merge_half(current, m.write_data)
        } else if m.byte {
            data::merge_byte(current, m.write_data)
        } else {
            m.write_data
        };
        if core.memory.access(m.alu_result, merged, false, true).is_none() {
            return false;
        }
        if core.trace {
            eprintln!("MEM store {:#010x} -> [{:#010x}]", merged, m.alu_result);
        }
    } else if m.mem_read {
        let Some(word) = core.memory.access(m.alu_result, 0, true, false) else {
            return false;
        };
        mem_read_data = if m.halfword {
            if m.sign_extend_load {
                data::sign_extend_half(word)
            } else {
                data::mask_half(word)
            }
        } else if m.byte {
            if m.sign_extend_load {
                data::sign_extend_byte(word)
            } else {
                data::mask_byte(word)
            }
        } else {
            word
        };
        if core.trace {
            eprintln!("MEM load [{:#010x}] -> {:#010x}", m.alu_result, mem_read_data);
        }
    }

    core.mem_wb = MemWb {
        valid: true,
        reg_write: m.reg_write,
        mem_to_reg: m.mem_to_reg,
        link: m.link,
        alu_result: m.alu_result,
        mem_read_data,
        write_reg: m.write_reg,
        pc_commit: m.pc_commit,
    };

    core.ex_mem.valid = false;
    true
}
