use super::text::percent;
use crate::stats::Stats;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Percentages {
  fwd_taken: f32,
  bkw_taken: f32,
  not_taken: f32,
  loads: f32,
  stores: f32,
  arith: f32,
}

#[derive(Debug, Serialize)]
struct RegRow {
  reg: usize,
  read: i64,
  write: i64,
}

#[derive(Debug, Serialize)]
struct JsonReport {
  insts: u64,
  r_type: u64,
  i_type: u64,
  j_type: u64,
  fwd_taken: u64,
  bkw_taken: u64,
  not_taken: u64,
  loads: u64,
  stores: u64,
  arith: u64,
  percent: Percentages,
  regs: Vec<RegRow>,
}

impl From<&Stats> for JsonReport {
  fn from(s: &Stats) -> Self {
    Self {
      insts: s.insts,
      r_type: s.r_type,
      i_type: s.i_type,
      j_type: s.j_type,
      fwd_taken: s.fwd_taken,
      bkw_taken: s.bkw_taken,
      not_taken: s.not_taken,
      loads: s.loads,
      stores: s.stores,
      arith: s.arith,
      percent: Percentages {
        fwd_taken: percent(s.fwd_taken, s.insts),
        bkw_taken: percent(s.bkw_taken, s.insts),
        not_taken: percent(s.not_taken, s.insts),
        loads: percent(s.loads, s.insts),
        stores: percent(s.stores, s.insts),
        arith: percent(s.arith, s.insts),
      },
      regs: s
        .regs
        .iter()
        .enumerate()
        .map(|(reg, c)| RegRow {
          reg,
          read: c.read,
          write: c.write,
        })
        .collect(),
    }
  }
}

pub fn render(stats: &Stats) -> serde_json::Result<String> {
  let mut out = serde_json::to_string_pretty(&JsonReport::from(stats))?;
  out.push('\n');
  Ok(out)
}
