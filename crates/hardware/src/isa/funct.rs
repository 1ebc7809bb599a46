//! R-type funct field values (bits 5:0, valid when the opcode is zero).

/// Shift left logical (by shamt).
pub const SLL: u32 = 0x00;
/// Shift right logical (by shamt).
pub const SRL: u32 = 0x02;
/// Shift right arithmetic (by shamt).
pub const SRA: u32 = 0x03;
/// Jump register.
pub const JR: u32 = 0x08;
/// Add.
pub const ADD: u32 = 0x20;
/// Add unsigned (no overflow trap; identical here).
pub const ADDU: u32 = 0x21;
/// Subtract.
pub const SUB: u32 = 0x22;
/// Subtract unsigned.
pub const SUBU: u32 = 0x23;
/// Bitwise AND.
pub const AND: u32 = 0x24;
/// Bitwise OR.
pub const OR: u32 = 0x25;
/// Bitwise XOR.
pub const XOR: u32 = 0x26;
/// Bitwise NOR.
pub const NOR: u32 = 0x27;
/// Set on less than (signed).
pub const SLT: u32 = 0x2A;
/// Set on less than unsigned.
pub const SLTU: u32 = 0x2B;
