//! One-line instruction rendering for trace output.

use crate::isa::abi;
use crate::isa::funct;
use crate::isa::opcodes;
use crate::isa::InstFields;

/// Renders an instruction word as a short assembly-like string.
///
/// Unknown encodings render as a raw `.word` directive; the simulator
/// executes them as no-ops, so the trace should still show what was fetched.
pub fn disasm(raw: u32) -> String {
    let f = InstFields::decode(raw);
    let rs = abi::name(f.rs);
    let rt = abi::name(f.rt);
    let rd = abi::name(f.rd);
    let simm = f.imm_sign_extended() as i32;

    match f.opcode {
        opcodes::OP_RTYPE => match f.funct {
            funct::SLL if raw == 0 => "nop".to_string(),
            funct::SLL => format!("sll {}, {}, {}", rd, rt, f.shamt),
            funct::SRL => format!("srl {}, {}, {}", rd, rt, f.shamt),
            funct::SRA => format!("sra {}, {}, {}", rd, rt, f.shamt),
            funct::JR => format!("jr {}", rs),
            funct::ADD => format!("add {}, {}, {}", rd, rs, rt),
            funct::ADDU => format!("addu {}, {}, {}", rd, rs, rt),
            funct::SUB => format!("sub {}, {}, {}", rd, rs, rt),
            funct::SUBU => format!("subu {}, {}, {}", rd, rs, rt),
            funct::AND => format!("and {}, {}, {}", rd, rs, rt),
            funct::OR => format!("or {}, {}, {}", rd, rs, rt),
            funct::XOR => format!("xor {}, {}, {}", rd, rs, rt),
            funct::NOR => format!("nor {}, {}, {}", rd, rs, rt),
            funct::SLT => format!("slt {}, {}, {}", rd, rs, rt),
            funct::SLTU => format!("sltu {}, {}, {}", rd, rs, rt),
            _ => format!(".word {:#010x}", raw),
        },
        opcodes::OP_J => format!("j {:#x}", f.jaddr << 2),
        opcodes::OP_JAL => format!("jal {:#x}", f.jaddr << 2),
        opcodes::OP_BEQ => format!("beq {}, {}, {}", rs, rt, simm),
        opcodes::OP_BNE => format!("bne {}, {}, {}", rs, rt, simm),
        opcodes::OP_ADDI => format!("addi {}, {}, {}", rt, rs, simm),
        opcodes::OP_ADDIU => format!("addiu {}, {}, {}", rt, rs, simm),
        opcodes::OP_SLTI => format!("slti {}, {}, {}", rt, rs, simm),
        opcodes::OP_SLTIU => format!("sltiu {}, {}, {}", rt, rs, simm),
        opcodes::OP_ANDI => format!("andi {}, {}, {:#x}", rt, rs, f.imm),
        opcodes::OP_ORI => format!("ori {}, {}, {:#x}", rt, rs, f.imm),
        opcodes::OP_XORI => format!("xori {}, {}, {:#x}", rt, rs, f.imm),
        opcodes::OP_LUI => format!("lui {}, {:#x}", rt, f.imm),
        opcodes::OP_LB => format!("lb {}, {}({})", rt, simm, rs),
        opcodes::OP_LH => format!("lh {}, {}({})", rt, simm, rs),
        opcodes::OP_LW => format!("lw {}, {}({})", rt, simm, rs),
        opcodes::OP_LBU => format!("lbu {}, {}({})", rt, simm, rs),
        opcodes::OP_LHU => format!("lhu {}, {}({})", rt, simm, rs),
        opcodes::OP_SB => format!("sb {}, {}({})", rt, simm, rs),
        opcodes::OP_SH => format!("sh {}, {}({})", rt, simm, rs),
        opcodes::OP_SW => format!("sw {}, {}({})", rt, simm, rs),
        _ => format!(".word {:#010x}", raw),
    }
}
