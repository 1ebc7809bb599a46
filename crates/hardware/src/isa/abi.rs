//! Register numbering and conventional MIPS ABI names.

/// The hardwired-zero register.
pub const REG_ZERO: usize = 0;
/// The link register written by `jal`.
pub const REG_RA: usize = 31;

/// Conventional names for R0..R31, indexed by register number.
pub const NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the conventional name of a register, or `"$?"` out of range.
pub fn name(idx: usize) -> &'static str {
    NAMES.get(idx).copied().unwrap_or("$?")
}
