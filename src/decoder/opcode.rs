//! MIPS32 opcode and function-code tables used by the classifier.

/// Primary opcodes, bits [31:26].
pub mod op {
  pub const SPECIAL: u8 = 0x00;
  pub const REGIMM: u8 = 0x01;
  pub const J: u8 = 0x02;
  pub const JAL: u8 = 0x03;
  pub const BEQ: u8 = 0x04;
  pub const BNE: u8 = 0x05;
  pub const BLEZ: u8 = 0x06;
  pub const BGTZ: u8 = 0x07;
  pub const ADDI: u8 = 0x08;
  pub const ADDIU: u8 = 0x09;
  pub const SLTI: u8 = 0x0a;
  pub const SLTIU: u8 = 0x0b;
  pub const ANDI: u8 = 0x0c;
  pub const ORI: u8 = 0x0d;
  pub const XORI: u8 = 0x0e;
  pub const LUI: u8 = 0x0f;
  pub const LB: u8 = 0x20;
  pub const LH: u8 = 0x21;
  pub const LWL: u8 = 0x22;
  pub const LW: u8 = 0x23;
  pub const LBU: u8 = 0x24;
  pub const LHU: u8 = 0x25;
  pub const LWR: u8 = 0x26;
  pub const SB: u8 = 0x28;
  pub const SH: u8 = 0x29;
  pub const SWL: u8 = 0x2a;
  pub const SW: u8 = 0x2b;
  pub const SWR: u8 = 0x2e;
  pub const LL: u8 = 0x30;
  pub const SC: u8 = 0x38;
}

/// SPECIAL function codes, bits [5:0] when `op == SPECIAL`.
pub mod funct {
  pub const SLL: u8 = 0x00;
  pub const MOVCI: u8 = 0x01;
  pub const SRL: u8 = 0x02;
  pub const SRA: u8 = 0x03;
  pub const SLLV: u8 = 0x04;
  pub const SRLV: u8 = 0x06;
  pub const SRAV: u8 = 0x07;
  pub const JR: u8 = 0x08;
  pub const JALR: u8 = 0x09;
  pub const SYSCALL: u8 = 0x0c;
  pub const BREAK: u8 = 0x0d;
  pub const MFHI: u8 = 0x10;
  pub const MTHI: u8 = 0x11;
  pub const MFLO: u8 = 0x12;
  pub const MTLO: u8 = 0x13;
  pub const MULT: u8 = 0x18;
  pub const MULTU: u8 = 0x19;
  pub const DIV: u8 = 0x1a;
  pub const DIVU: u8 = 0x1b;
  pub const ADD: u8 = 0x20;
  pub const ADDU: u8 = 0x21;
  pub const SUB: u8 = 0x22;
  pub const SUBU: u8 = 0x23;
  pub const AND: u8 = 0x24;
  pub const OR: u8 = 0x25;
  pub const XOR: u8 = 0x26;
  pub const NOR: u8 = 0x27;
  pub const SLT: u8 = 0x2a;
  pub const SLTU: u8 = 0x2b;
}

/// Human readable name for an encoding. Only used for display.
pub fn mnemonic(opcode: u8, function: u8) -> &'static str {
  if opcode == op::SPECIAL {
    return match function {
      funct::SLL => "sll",
      funct::MOVCI => "movci",
      funct::SRL => "srl",
      funct::SRA => "sra",
      funct::SLLV => "sllv",
      funct::SRLV => "srlv",
      funct::SRAV => "srav",
      funct::JR => "jr",
      funct::JALR => "jalr",
      funct::SYSCALL => "syscall",
      funct::BREAK => "break",
      funct::MFHI => "mfhi",
      funct::MTHI => "mthi",
      funct::MFLO => "mflo",
      funct::MTLO => "mtlo",
      funct::MULT => "mult",
      funct::MULTU => "multu",
      funct::DIV => "div",
      funct::DIVU => "divu",
      funct::ADD => "add",
      funct::ADDU => "addu",
      funct::SUB => "sub",
      funct::SUBU => "subu",
      funct::AND => "and",
      funct::OR => "or",
      funct::XOR => "xor",
      funct::NOR => "nor",
      funct::SLT => "slt",
      funct::SLTU => "sltu",
      _ => "unknown",
    };
  }

  match opcode {
    op::REGIMM => "regimm",
    op::J => "j",
    op::JAL => "jal",
    op::BEQ => "beq",
    op::BNE => "bne",
    op::BLEZ => "blez",
    op::BGTZ => "bgtz",
    op::ADDI => "addi",
    op::ADDIU => "addiu",
    op::SLTI => "slti",
    op::SLTIU => "sltiu",
    op::ANDI => "andi",
    op::ORI => "ori",
    op::XORI => "xori",
    op::LUI => "lui",
    op::LB => "lb",
    op::LH => "lh",
    op::LWL => "lwl",
    op::LW => "lw",
    op::LBU => "lbu",
    op::LHU => "lhu",
    op::LWR => "lwr",
    op::SB => "sb",
    op::SH => "sh",
    op::SWL => "swl",
    op::SW => "sw",
    op::SWR => "swr",
    op::LL => "ll",
    op::SC => "sc",
    _ => "unknown",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mnemonic_special() {
    assert_eq!(mnemonic(op::SPECIAL, funct::ADD), "add");
    assert_eq!(mnemonic(op::SPECIAL, funct::JR), "jr");
    assert_eq!(mnemonic(op::SPECIAL, 0x3f), "unknown");
  }

  #[test]
  fn test_mnemonic_ignores_funct_outside_special() {
    // funct bits of an I-type word are part of the immediate
    assert_eq!(mnemonic(op::SW, funct::ADD), "sw");
    assert_eq!(mnemonic(op::JAL, 0), "jal");
    assert_eq!(mnemonic(0x3f, 0), "unknown");
  }
}
