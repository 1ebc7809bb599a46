//! Instruction fetch (IF) stage.

use crate::core::Core;
use crate::isa::disasm::disasm;
use crate::soc::traits::MemoryPort;

/// Fetches one instruction word from the fetch pointer.
///
/// On success IF/ID is populated and the fetch pointer advances by 4. If the
/// memory denies the request, IF does nothing: IF/ID and the fetch pointer
/// are left untouched and the pipeline naturally stalls behind the empty
/// slot. IF never squashes itself; redirecting the fetch pointer and
/// flushing wrong-path instructions is the execute stage's job.
pub fn run<M: MemoryPort>(core: &mut Core<M>) {
    let Some(instruction) = core.memory.access(core.fetch_pc, 0, true, false) else {
        if core.trace {
            eprintln!("IF  pc={:#010x} # memory not ready", core.fetch_pc);
        }
        return;
    };

    if core.trace {
        eprintln!(
            "IF  pc={:#010x} inst={:#010x}  {}",
            core.fetch_pc,
            instruction,
            disasm(instruction)
        );
    }

    core.if_id.instruction = instruction;
    core.if_id.pc_plus_4 = core.fetch_pc.wrapping_add(4);
    core.if_id.valid = true;
    core.fetch_pc = core.fetch_pc.wrapping_add(4);
}
