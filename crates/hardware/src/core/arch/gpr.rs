//! MIPS general-purpose register file.
//!
//! This module implements the architectural register state of the core:
//! 1. **Storage:** 32 word registers (R0..R31) plus the committed PC.
//! 2. **Invariant enforcement:** R0 reads as zero; writes to R0 are dropped.
//! 3. **Port semantics:** one combined access with two read ports and one
//!    write port. The write port commits before the read ports observe, so a
//!    writeback and a decode in the same cycle see the written value.

/// General-purpose register file with the committed program counter.
pub struct RegisterFile {
    regs: [u32; 32],
    /// The architectural PC: the successor of the last committed instruction.
    pub pc: u32,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all registers and the PC cleared.
    pub fn new() -> Self {
        Self {
            regs: [0; 32],
            pc: 0,
        }
    }

    /// Reads a register. R0 always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a register. Writes to R0 are silently dropped.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// The combined register-file port: two reads and an optional write.
    ///
    /// The write happens first so that a decode in the same cycle as a
    /// writeback to the same register observes the new value.
    ///
    /// # Returns
    ///
    /// The values of `rs` and `rt` after any write has committed.
    pub fn access(
        &mut self,
        rs: usize,
        rt: usize,
        write_reg: usize,
        do_write: bool,
        write_data: u32,
    ) -> (u32, u32) {
        if do_write {
            self.write(write_reg, write_data);
        }
        (self.read(rs), self.read(rt))
    }

    /// Dumps all registers in the `R[i]: value` log format, one per line.
    ///
    /// Values print as signed decimal to match the trace logs the comparison
    /// harness consumes.
    pub fn dump(&self) {
        for i in 0..32 {
            println!("R[{}]: {}", i, self.read(i) as i32);
        }
    }
}
