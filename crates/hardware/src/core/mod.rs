//! The MIPS-I core: architectural state, pipeline latches, and the per-cycle
//! advance logic for both execution models.
//!
//! `advance()` is the sole driver; one call is one logical cycle. The
//! pipelined model runs the stages in reverse order (WB, MEM, EX, ID, IF) so
//! each stage consumes the previous cycle's state of its input latch before
//! the upstream stage rewrites it. The hazard and forwarding units are pure
//! functions of the cycle-boundary snapshot, captured before any stage runs.

/// Architectural register state.
pub mod arch;
/// Pipeline latches, control signals, hazards.
pub mod pipeline;
/// Single-cycle reference model.
pub mod single_cycle;
/// Stage functions.
pub mod stages;
/// Functional units.
pub mod units;

use serde::Deserialize;

use crate::core::arch::RegisterFile;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::stages::execute::ForwardFrame;
use crate::core::units::Alu;
use crate::isa::InstFields;
use crate::soc::traits::MemoryPort;
use crate::stats::SimStats;

/// Execution model selection.
///
/// The single-cycle model is the functional oracle: for any program without
/// MMIO side effects, both models must produce identical architectural state
/// per retired instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ExecMode {
    /// One instruction committed per `advance()`; no latches, no forwarding.
    SingleCycle,
    /// Classic five-stage in-order pipeline (default).
    #[default]
    Pipelined,
}

/// The simulated core.
///
/// Owns the register file, the committed PC (inside the register file), the
/// speculative fetch pointer, the four pipeline latches, and the memory
/// collaborator. Architectural state is mutated only by WB (registers, PC)
/// and MEM (memory).
pub struct Core<M: MemoryPort> {
    /// Backing memory collaborator.
    pub memory: M,
    /// Register file and committed PC.
    pub regs: RegisterFile,
    /// ALU collaborator.
    pub alu: Alu,
    /// Fetch pointer; diverges from the committed PC while instructions are
    /// speculatively fetched past an unresolved branch.
    pub fetch_pc: u32,
    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,
    /// Selected execution model.
    pub mode: ExecMode,
    /// Emit per-stage trace lines to stderr.
    pub trace: bool,
    /// Performance counters.
    pub stats: SimStats,
}

impl<M: MemoryPort> Core<M> {
    /// Creates a core over the given memory, reset to PC 0, pipelined mode.
    pub fn new(memory: M) -> Self {
        Self {
            memory,
            regs: RegisterFile::new(),
            alu: Alu::new(),
            fetch_pc: 0,
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            mode: ExecMode::default(),
            trace: false,
            stats: SimStats::default(),
        }
    }

    /// Selects the execution model and clears all pipeline latches.
    pub fn initialize(&mut self, mode: ExecMode) {
        self.mode = mode;
        self.if_id = IfId::default();
        self.id_ex = IdEx::default();
        self.ex_mem = ExMem::default();
        self.mem_wb = MemWb::default();
    }

    /// Moves the committed PC and the fetch pointer to `pc`.
    pub fn reset_to(&mut self, pc: u32) {
        self.regs.pc = pc;
        self.fetch_pc = pc;
    }

    /// The committed PC: the successor of the last retired instruction.
    pub fn pc(&self) -> u32 {
        self.regs.pc
    }

    /// Advances the core by one cycle under the selected model.
    pub fn advance(&mut self) {
        self.stats.cycles += 1;
        match self.mode {
            ExecMode::SingleCycle => single_cycle::run(self),
            ExecMode::Pipelined => self.advance_pipelined(),
        }
    }

    /// Prints all 32 registers in the cycle-log format, plus the PC.
    pub fn print_register_file(&self) {
        self.regs.dump();
        println!("PC: {:#010x}", self.regs.pc);
    }

    /// One cycle of the pipelined model.
    ///
    /// The forwarding frame and the load-use decision are captured from the
    /// cycle-boundary latch state first; the stages then rewrite the latches
    /// in place. A memory denial in MEM ends the cycle after WB, preserving
    /// EX/MEM, ID/EX, and IF/ID for retry. A load-use stall injects a bubble
    /// into ID/EX and skips ID and IF, holding IF/ID and the fetch pointer
    /// so the stalled instruction is re-decoded next cycle.
    fn advance_pipelined(&mut self) {
        let frame = ForwardFrame {
            ex_mem: self.ex_mem,
            mem_wb: self.mem_wb,
        };
        let stall = self.if_id.valid
            && hazards::load_use_stall(&self.id_ex, &InstFields::decode(self.if_id.instruction));
        let bubble_pc = self.id_ex.pc_plus_4;

        stages::write_back::run(self);

        if !stages::memory::run(self) {
            if self.trace {
                eprintln!("MEM not ready; pipeline stalled");
            }
            // The WB that already ran may have retired a producer whose
            // result lived only in MEM/WB. The frozen instruction in ID/EX
            // re-latches its register reads so that value survives the
            // stall; in-flight producers still win through forwarding.
            if self.id_ex.valid {
                let (rd1, rd2) = self.regs.access(self.id_ex.rs, self.id_ex.rt, 0, false, 0);
                self.id_ex.read_data_1 = rd1;
                self.id_ex.read_data_2 = rd2;
            }
            self.stats.stalls_mem += 1;
            return;
        }

        stages::execute::run(self, &frame);

        if stall {
            if self.trace {
                eprintln!("ID  load-use hazard; bubble injected");
            }
            self.id_ex = IdEx::bubble(bubble_pc);
            self.stats.bubbles_injected += 1;
            return;
        }

        stages::decode::run(self);
        stages::fetch::run(self);
    }
}
