//! Simulation statistics collection and reporting.
//!
//! This module tracks performance counters for a run:
//! 1. **Cycle and CPI:** total cycles, retired payloads, derived CPI.
//! 2. **Hazards:** injected load-use bubbles and memory stall cycles.
//! 3. **Control flow:** taken branches and pipeline flushes.

use std::time::Instant;

/// Counters for one simulation run.
///
/// `instructions_retired` counts every valid MEM/WB payload the writeback
/// stage retires, bubbles included; `bubbles_injected` tracks the hazard
/// unit separately so real instruction throughput is recoverable as the
/// difference.
#[derive(Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Payloads retired by the writeback stage (bubbles included).
    pub instructions_retired: u64,
    /// Bubbles injected by the load-use hazard unit.
    pub bubbles_injected: u64,
    /// Cycles lost to memory not-ready in the MEM stage or the
    /// single-cycle model.
    pub stalls_mem: u64,
    /// IF/ID + ID/EX flushes performed by the control-hazard resolver.
    pub flushes: u64,
    /// Conditional branches resolved taken.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            bubbles_injected: 0,
            stalls_mem: 0,
            flushes: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Prints the summary report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1);
        let instr = self.instructions_retired.max(1);
        let cpi = cyc as f64 / instr as f64;

        println!("==================================================");
        println!("MIPS CORE SIMULATION STATISTICS");
        println!("==================================================");
        println!("host_seconds        {:.4} s", seconds);
        println!("sim_cycles          {}", self.cycles);
        println!("sim_retired         {}", self.instructions_retired);
        println!("sim_cpi             {:.4}", cpi);
        println!("--------------------------------------------------");
        println!("hazard.bubbles      {}", self.bubbles_injected);
        println!("stalls.memory       {}", self.stalls_mem);
        println!("control.flushes     {}", self.flushes);
        println!("control.taken       {}", self.branches_taken);
        println!("==================================================");
    }
}
