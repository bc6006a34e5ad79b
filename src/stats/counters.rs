use serde::{Deserialize, Serialize};

pub const NUM_REGS: usize = 32;

/// Read/write counters of one architectural register.
///
/// Signed: `jal` decrements counters that were never incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegCounter {
  pub read: i64,
  pub write: i64,
}

/// Aggregate statistics of one trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
  pub insts: u64,
  pub r_type: u64,
  pub i_type: u64,
  pub j_type: u64,
  pub fwd_taken: u64,
  pub bkw_taken: u64,
  pub not_taken: u64,
  pub loads: u64,
  pub stores: u64,
  pub arith: u64,
  pub regs: [RegCounter; NUM_REGS],
}

impl Stats {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn reg(&self, index: usize) -> Option<RegCounter> {
    self.regs.get(index).copied()
  }

  /// First register with a negative read or write count, if any.
  pub fn first_negative_reg(&self) -> Option<(usize, RegCounter)> {
    self
      .regs
      .iter()
      .enumerate()
      .find(|(_, c)| c.read < 0 || c.write < 0)
      .map(|(i, c)| (i, *c))
  }

  /// One-line summary for logs and the step shell.
  pub fn summary(&self) -> String {
    format!(
      "insts={} r={} i={} j={} fwd={} bkw={} not={} loads={} stores={} arith={}",
      self.insts,
      self.r_type,
      self.i_type,
      self.j_type,
      self.fwd_taken,
      self.bkw_taken,
      self.not_taken,
      self.loads,
      self.stores,
      self.arith
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_stats_all_zero() {
    let stats = Stats::new();
    assert_eq!(stats.insts, 0);
    assert!(stats.regs.iter().all(|c| *c == RegCounter::default()));
    assert_eq!(stats.first_negative_reg(), None);
  }

  #[test]
  fn test_reg_lookup() {
    let mut stats = Stats::new();
    stats.regs[31].write = 2;
    assert_eq!(stats.reg(31), Some(RegCounter { read: 0, write: 2 }));
    assert_eq!(stats.reg(32), None);
  }

  #[test]
  fn test_first_negative_reg() {
    let mut stats = Stats::new();
    stats.regs[16].write = -1;
    stats.regs[20].read = -2;
    assert_eq!(stats.first_negative_reg(), Some((16, RegCounter { read: 0, write: -1 })));
  }
}
