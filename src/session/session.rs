use super::shell::{Command, CommandSource, Shell, HELP};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::report::write_report;
use crate::stats::{Aggregator, Stats};
use crate::trace::{open_trace, TraceEntry};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
  Continuous,
  Step,
}

/// One pass over a trace file: read, aggregate, report.
pub struct Session {
  config: AppConfig,
}

impl Session {
  pub fn from_app_config(config: &AppConfig) -> Result<Self> {
    crate::config::config::validate_config(config)?;
    Ok(Self { config: config.clone() })
  }

  pub fn step_mode(&self) -> StepMode {
    if self.config.analysis.step_mode {
      StepMode::Step
    } else {
      StepMode::Continuous
    }
  }

  pub fn trace_path(&self) -> PathBuf {
    PathBuf::from(&self.config.trace.path)
  }

  pub fn report_path(&self) -> PathBuf {
    PathBuf::from(&self.config.report.path)
  }

  /// Run the pass. Returns `None` when step mode was quit before the end of
  /// the trace; nothing is written in that case.
  pub fn run(&mut self) -> Result<Option<Stats>> {
    match self.step_mode() {
      StepMode::Continuous => self.run_continuous().map(Some),
      StepMode::Step => {
        let mut shell = Shell::new()?;
        self.run_with(&mut shell)
      },
    }
  }

  /// Step mode driven by an arbitrary command source.
  pub fn run_with(&mut self, commands: &mut dyn CommandSource) -> Result<Option<Stats>> {
    let trace = self.trace_path();
    log::info!("stepping through {:?}", trace);
    println!("Step mode - {}", HELP);

    let mut entries = open_trace(&trace, self.config.trace.max_entries)?;
    let mut agg = Aggregator::new();
    let mut exhausted = false;

    while !exhausted {
      match commands.read_command()? {
        Command::Step(n) => {
          for _ in 0..n {
            match entries.next() {
              Some(entry) => step_one(&mut agg, entry?, true),
              None => {
                exhausted = true;
                break;
              },
            }
          }
        },
        Command::Print => println!("{}", agg.stats().summary()),
        Command::Continue => {
          for entry in entries.by_ref() {
            step_one(&mut agg, entry?, false);
          }
          exhausted = true;
        },
        Command::Quit => {
          log::warn!("quit after {} instructions, no report written", agg.stats().insts);
          return Ok(None);
        },
      }
    }

    println!("End of trace");
    self.finish(agg.finish()).map(Some)
  }

  fn run_continuous(&mut self) -> Result<Stats> {
    let trace = self.trace_path();
    log::info!("reading trace {:?}", trace);

    let mut agg = Aggregator::new();
    for entry in open_trace(&trace, self.config.trace.max_entries)? {
      step_one(&mut agg, entry?, false);
    }
    self.finish(agg.finish())
  }

  fn finish(&self, stats: Stats) -> Result<Stats> {
    log::info!("{}", stats.summary());
    if self.config.analysis.strict {
      check_non_negative(&stats)?;
    }
    write_report(&self.report_path(), &stats, self.config.report.format)?;
    Ok(stats)
  }
}

fn step_one(agg: &mut Aggregator, entry: TraceEntry, echo: bool) {
  let branch = agg.push_raw(entry.addr, entry.word);
  if echo {
    // push_raw just stored the decoded entry as prev
    if let Some(inst) = agg.prev() {
      match branch {
        Some(kind) => println!("[line {}] {}  <{}>", entry.line, inst, kind),
        None => println!("[line {}] {}", entry.line, inst),
      }
    }
  }
}

/// Strict mode check: every register counter must be non-negative.
pub fn check_non_negative(stats: &Stats) -> Result<()> {
  match stats.first_negative_reg() {
    Some((reg, c)) => Err(Error::NegativeRegister {
      reg,
      read: c.read,
      write: c.write,
    }),
    None => Ok(()),
  }
}

/// Convenience wrapper: aggregate `trace` and write a text report to `output`.
pub fn run_files(trace: &Path, output: &Path) -> Result<Stats> {
  let mut config = AppConfig::default();
  config.trace.path = trace.to_string_lossy().to_string();
  config.report.path = output.to_string_lossy().to_string();
  let mut session = Session::from_app_config(&config)?;
  session.run_continuous()
}
