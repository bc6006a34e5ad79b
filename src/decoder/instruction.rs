use super::bits::bits_at;
use super::opcode::{self, op};
use std::fmt;

/// Encoding shape, derived from the primary opcode alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstType {
  R,
  I,
  J,
}

impl InstType {
  pub fn from_op(opcode: u8) -> Self {
    match opcode {
      op::SPECIAL => InstType::R,
      op::J | op::JAL => InstType::J,
      _ => InstType::I,
    }
  }
}

/// A decoded trace entry.
///
/// Every field is extracted for every word regardless of shape; consumers
/// only look at the fields that make sense for the matched opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
  pub addr: u64,
  pub word: u32,
  pub op: u8,
  pub rs: u8,
  pub rt: u8,
  pub rd: u8,
  pub shamt: u8,
  pub funct: u8,
  /// Raw 16-bit pattern, not sign-extended.
  pub imm: u16,
  pub j_addr: u32,
  pub ty: InstType,
}

impl Instruction {
  pub fn decode(addr: u64, word: u32) -> Self {
    let w = word as u64;
    let opcode = bits_at(w, 26, 31) as u8;
    Self {
      addr,
      word,
      op: opcode,
      rs: bits_at(w, 21, 25) as u8,
      rt: bits_at(w, 16, 20) as u8,
      rd: bits_at(w, 11, 15) as u8,
      shamt: bits_at(w, 6, 10) as u8,
      funct: bits_at(w, 0, 5) as u8,
      imm: bits_at(w, 0, 15) as u16,
      j_addr: bits_at(w, 0, 25) as u32,
      ty: InstType::from_op(opcode),
    }
  }

  pub fn mnemonic(&self) -> &'static str {
    opcode::mnemonic(self.op, self.funct)
  }

  pub fn is_cond_branch(&self) -> bool {
    matches!(self.op, op::BEQ | op::BNE)
  }
}

impl fmt::Display for Instruction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:#010x}: {:08x} {:<7} ", self.addr, self.word, self.mnemonic())?;
    match self.ty {
      InstType::R => write!(
        f,
        "[R] rs=${} rt=${} rd=${} shamt={} funct={:#04x}",
        self.rs, self.rt, self.rd, self.shamt, self.funct
      ),
      InstType::I => write!(f, "[I] rs=${} rt=${} imm={:#06x}", self.rs, self.rt, self.imm),
      InstType::J => write!(f, "[J] target={:#09x}", self.j_addr),
    }
  }
}

/// Decode one `(addr, word)` trace pair.
pub fn decode(addr: u64, word: u32) -> Instruction {
  let inst = Instruction::decode(addr, word);
  log::trace!("decoded {}", inst);
  inst
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_decode_r_type_add() {
    // add $6, $5, $4
    let inst = decode(0x0040_0000, 0x00a4_3020);
    assert_eq!(inst.ty, InstType::R);
    assert_eq!(inst.op, 0);
    assert_eq!(inst.rs, 5);
    assert_eq!(inst.rt, 4);
    assert_eq!(inst.rd, 6);
    assert_eq!(inst.shamt, 0);
    assert_eq!(inst.funct, 0x20);
    assert_eq!(inst.mnemonic(), "add");
  }

  #[test]
  fn test_decode_i_type_beq() {
    let inst = decode(0x0040_0000, 0x1085_0003);
    assert_eq!(inst.ty, InstType::I);
    assert_eq!(inst.op, 0x04);
    assert_eq!(inst.rs, 4);
    assert_eq!(inst.rt, 5);
    assert_eq!(inst.imm, 3);
    assert!(inst.is_cond_branch());
  }

  #[test]
  fn test_decode_imm_not_sign_extended() {
    // addiu $sp, $sp, -8
    let inst = decode(0, 0x27bd_fff8);
    assert_eq!(inst.op, 0x09);
    assert_eq!(inst.imm, 0xfff8);
  }

  #[test]
  fn test_decode_j_type_jal() {
    let inst = decode(0x0040_0000, 0x0c10_0000);
    assert_eq!(inst.ty, InstType::J);
    assert_eq!(inst.op, 0x03);
    assert_eq!(inst.j_addr, 0x0010_0000);
    // jal still exposes register fields carved out of the target
    assert_eq!(inst.rs, 0);
    assert_eq!(inst.rt, 16);
  }

  #[test]
  fn test_type_from_op() {
    assert_eq!(InstType::from_op(0x00), InstType::R);
    assert_eq!(InstType::from_op(0x02), InstType::J);
    assert_eq!(InstType::from_op(0x03), InstType::J);
    assert_eq!(InstType::from_op(0x01), InstType::I);
    assert_eq!(InstType::from_op(0x3f), InstType::I);
  }

  #[test]
  fn test_decode_is_deterministic() {
    for word in [0u32, 0xffff_ffff, 0x8c88_0004, 0x0800_0010] {
      assert_eq!(decode(0x10, word), decode(0x10, word));
    }
  }

  #[test]
  fn test_decode_all_ones() {
    let inst = decode(0, 0xffff_ffff);
    assert_eq!(inst.op, 0x3f);
    assert_eq!(inst.rs, 31);
    assert_eq!(inst.rt, 31);
    assert_eq!(inst.rd, 31);
    assert_eq!(inst.shamt, 31);
    assert_eq!(inst.funct, 0x3f);
    assert_eq!(inst.imm, 0xffff);
    assert_eq!(inst.j_addr, 0x03ff_ffff);
    assert_eq!(inst.ty, InstType::I);
  }
}
