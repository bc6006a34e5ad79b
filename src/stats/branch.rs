use crate::decoder::Instruction;
use std::fmt;

/// Byte distance of sequential fall-through.
pub const FALL_THROUGH: i64 = 4;

/// Control-flow outcome inferred between two consecutive trace entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
  ForwardTaken,
  BackwardTaken,
  NotTaken,
}

impl fmt::Display for BranchKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      BranchKind::ForwardTaken => "fwd-taken",
      BranchKind::BackwardTaken => "bkw-taken",
      BranchKind::NotTaken => "not-taken",
    };
    f.write_str(s)
  }
}

/// Classify the transition `prev -> cur` from the address delta alone.
///
/// Any non-sequential move counts as taken whether or not `prev` was a branch.
/// Only `not-taken` looks at the previous opcode: fall-through (or a repeated
/// fetch address) after beq/bne. Deltas in `1..4` and plain fall-through after
/// a non-branch are not counted.
pub fn classify(prev: &Instruction, cur: &Instruction) -> Option<BranchKind> {
  let diff = cur.addr.wrapping_sub(prev.addr) as i64;
  if diff > FALL_THROUGH {
    Some(BranchKind::ForwardTaken)
  } else if diff < 0 {
    Some(BranchKind::BackwardTaken)
  } else if (diff == FALL_THROUGH || diff == 0) && prev.is_cond_branch() {
    Some(BranchKind::NotTaken)
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::decoder::decode;

  const BEQ: u32 = 0x1085_0003;
  const ADD: u32 = 0x0000_0020;

  #[test]
  fn test_forward_taken() {
    let prev = decode(0x0040_0000, BEQ);
    let cur = decode(0x0040_0010, ADD);
    assert_eq!(classify(&prev, &cur), Some(BranchKind::ForwardTaken));
  }

  #[test]
  fn test_backward_taken() {
    let prev = decode(0x0040_0010, ADD);
    let cur = decode(0x0040_0000, ADD);
    assert_eq!(classify(&prev, &cur), Some(BranchKind::BackwardTaken));
  }

  #[test]
  fn test_not_taken_needs_branch() {
    let prev = decode(0x0040_0000, BEQ);
    let cur = decode(0x0040_0004, ADD);
    assert_eq!(classify(&prev, &cur), Some(BranchKind::NotTaken));

    let prev = decode(0x0040_0000, ADD);
    assert_eq!(classify(&prev, &cur), None);
  }

  #[test]
  fn test_small_deltas_uncounted() {
    let prev = decode(0x0040_0000, BEQ);
    for delta in 1..4 {
      let cur = decode(0x0040_0000 + delta, ADD);
      assert_eq!(classify(&prev, &cur), None, "delta {}", delta);
    }
  }

  #[test]
  fn test_same_address_after_branch_is_not_taken() {
    let prev = decode(0x0040_0000, BEQ);
    let cur = decode(0x0040_0000, ADD);
    assert_eq!(classify(&prev, &cur), Some(BranchKind::NotTaken));

    let prev = decode(0x0040_0000, ADD);
    assert_eq!(classify(&prev, &cur), None);
  }

  #[test]
  fn test_delta_is_signed_across_high_addresses() {
    let prev = decode(0x8000_0000_0000_0000, ADD);
    let cur = decode(0x7fff_ffff_ffff_fff0, ADD);
    assert_eq!(classify(&prev, &cur), Some(BranchKind::BackwardTaken));
  }
}
