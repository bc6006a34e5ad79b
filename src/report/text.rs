use crate::stats::Stats;
use std::fmt::Write;

/// `count / insts * 100`, zero for an empty trace.
///
/// Computed in single precision so the digits match existing statistics
/// files (1/3 prints as `33.333336`).
pub fn percent(count: u64, insts: u64) -> f32 {
  if insts == 0 {
    return 0.0;
  }
  count as f32 / insts as f32 * 100.0
}

/// Render the plain text report.
pub fn render(stats: &Stats) -> String {
  let mut out = String::new();
  // writing into a String can't fail
  let _ = write_report(&mut out, stats);
  out
}

fn write_report(out: &mut String, stats: &Stats) -> std::fmt::Result {
  writeln!(out, "insts: {}", stats.insts)?;
  writeln!(out, "r-type: {}", stats.r_type)?;
  writeln!(out, "i-type: {}", stats.i_type)?;
  writeln!(out, "j-type: {}", stats.j_type)?;

  let pcts = [
    ("fwd-taken", stats.fwd_taken),
    ("bkw-taken", stats.bkw_taken),
    ("not-taken", stats.not_taken),
    ("loads", stats.loads),
    ("stores", stats.stores),
    ("arith", stats.arith),
  ];
  for (name, count) in pcts {
    writeln!(out, "{}: {:.6}", name, percent(count, stats.insts))?;
  }

  for (i, reg) in stats.regs.iter().enumerate() {
    writeln!(out, "reg-{}: {} {}", i, reg.read, reg.write)?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::stats::aggregate_raw;

  #[test]
  fn test_percent() {
    assert_eq!(percent(1, 2), 50.0);
    assert_eq!(percent(0, 0), 0.0);
    assert_eq!(format!("{:.6}", percent(1, 3)), "33.333336");
    assert_eq!(format!("{:.6}", percent(2, 3)), "66.666672");
  }

  #[test]
  fn test_render_single_add() {
    let stats = aggregate_raw([(0x0040_0000, 0x00a4_3020)]);
    let text = render(&stats);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10 + 32);
    assert_eq!(
      &lines[..10],
      &[
        "insts: 1",
        "r-type: 1",
        "i-type: 0",
        "j-type: 0",
        "fwd-taken: 0.000000",
        "bkw-taken: 0.000000",
        "not-taken: 0.000000",
        "loads: 0.000000",
        "stores: 0.000000",
        "arith: 100.000000",
      ]
    );
    assert_eq!(lines[10], "reg-0: 0 0");
    assert_eq!(lines[14], "reg-4: 1 0");
    assert_eq!(lines[15], "reg-5: 1 0");
    assert_eq!(lines[16], "reg-6: 0 1");
    assert_eq!(lines[41], "reg-31: 0 0");
    assert!(text.ends_with("reg-31: 0 0\n"));
  }

  #[test]
  fn test_render_empty_trace() {
    let text = render(&Stats::new());
    assert!(text.starts_with("insts: 0\n"));
    assert!(text.contains("fwd-taken: 0.000000\n"));
    assert!(text.contains("arith: 0.000000\n"));
    assert!(!text.contains("NaN"));
  }

  #[test]
  fn test_render_negative_registers() {
    let stats = aggregate_raw([(0x0040_0000, 0x0c10_0000)]);
    let text = render(&stats);
    assert!(text.contains("reg-0: -1 0\n"));
    assert!(text.contains("reg-16: 0 -1\n"));
    assert!(text.contains("reg-31: 0 1\n"));
  }
}
