use super::branch::{classify, BranchKind};
use super::counters::Stats;
use super::regs::apply_register_deltas;
use crate::decoder::opcode::{funct, op};
use crate::decoder::{decode, InstType, Instruction};

/// Folds decoded instructions into a [`Stats`] record.
///
/// Instructions must be pushed in trace order: the branch tally compares each
/// entry with the one pushed right before it.
#[derive(Debug, Default)]
pub struct Aggregator {
  stats: Stats,
  prev: Option<Instruction>,
}

impl Aggregator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Account for one instruction. Returns the branch outcome between the
  /// previous entry and `cur`, if one was counted.
  pub fn push(&mut self, cur: Instruction) -> Option<BranchKind> {
    let stats = &mut self.stats;
    stats.insts += 1;

    match cur.ty {
      InstType::R => stats.r_type += 1,
      InstType::I => stats.i_type += 1,
      InstType::J => stats.j_type += 1,
    }

    tally_load_store(stats, cur.op);
    if is_arith(&cur) {
      stats.arith += 1;
    }
    apply_register_deltas(stats, &cur);

    let branch = self.prev.as_ref().and_then(|prev| classify(prev, &cur));
    match branch {
      Some(BranchKind::ForwardTaken) => stats.fwd_taken += 1,
      Some(BranchKind::BackwardTaken) => stats.bkw_taken += 1,
      Some(BranchKind::NotTaken) => stats.not_taken += 1,
      None => {},
    }

    self.prev = Some(cur);
    branch
  }

  pub fn push_raw(&mut self, addr: u64, word: u32) -> Option<BranchKind> {
    self.push(decode(addr, word))
  }

  pub fn stats(&self) -> &Stats {
    &self.stats
  }

  pub fn prev(&self) -> Option<&Instruction> {
    self.prev.as_ref()
  }

  pub fn finish(self) -> Stats {
    self.stats
  }
}

/// Fold a whole decoded stream.
pub fn aggregate<I>(insts: I) -> Stats
where
  I: IntoIterator<Item = Instruction>,
{
  let mut agg = Aggregator::new();
  for inst in insts {
    agg.push(inst);
  }
  agg.finish()
}

/// Decode and fold a stream of raw `(addr, word)` pairs.
pub fn aggregate_raw<I>(pairs: I) -> Stats
where
  I: IntoIterator<Item = (u64, u32)>,
{
  aggregate(pairs.into_iter().map(|(addr, word)| decode(addr, word)))
}

// The load set is lb/lh/lw/lbu/lhu. lwl, lwr and ll are not counted even
// though sc shows up in the register table; kept as-is so counts match
// previously generated reports.
fn tally_load_store(stats: &mut Stats, opcode: u8) {
  match opcode {
    op::LB | op::LH | op::LW | op::LBU | op::LHU => stats.loads += 1,
    op::SB | op::SH | op::SW => stats.stores += 1,
    _ => {},
  }
}

fn is_arith(inst: &Instruction) -> bool {
  if inst.op == op::SPECIAL {
    matches!(
      inst.funct,
      funct::ADD
        | funct::ADDU
        | funct::SUB
        | funct::SUBU
        | funct::MULT
        | funct::MULTU
        | funct::DIV
        | funct::DIVU
        | funct::MFHI
        | funct::MFLO
        | funct::SLL
        | funct::MOVCI
    )
  } else {
    matches!(inst.op, op::ADDI | op::ADDIU)
  }
}
