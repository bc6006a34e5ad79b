use clap::Parser;
use mipstat::config::{load_and_merge_configs, CliOverrides};
use mipstat::utils::log::{init_log, set_quiet};
use mipstat::{ReportFormat, Session};
use std::path::PathBuf;
use std::process::ExitCode;

/// mipstat - MIPS32 trace statistics
#[derive(Parser, Debug)]
#[command(name = "mipstat")]
#[command(version = "0.1.0")]
#[command(about = "Instruction mix, branch and register statistics for MIPS32 traces", long_about = None)]
struct Args {
  /// Trace file of `addr word` hex pairs (default: trace.txt)
  trace: Option<String>,

  /// Report output path (default: statistics.txt)
  output: Option<String>,

  /// Custom TOML configuration file
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Report format: text or json
  #[arg(short, long, value_name = "FORMAT")]
  format: Option<String>,

  /// Refuse traces with more entries than this
  #[arg(long, value_name = "N")]
  max_entries: Option<usize>,

  /// Fail instead of reporting negative register counters
  #[arg(long)]
  strict: bool,

  /// Enable step mode (interactive stepping)
  #[arg(short, long)]
  step: bool,

  /// Quiet mode (suppress log messages)
  #[arg(short, long)]
  quiet: bool,
}

fn run(args: Args) -> mipstat::Result<()> {
  let format = args.format.as_deref().map(str::parse::<ReportFormat>).transpose()?;

  let cli = CliOverrides {
    trace: args.trace,
    output: args.output,
    format,
    max_entries: args.max_entries,
    strict: args.strict,
    step: args.step,
    quiet: args.quiet,
  };

  let config = load_and_merge_configs(args.config.as_deref(), &cli)?;
  set_quiet(config.analysis.quiet);

  let mut session = Session::from_app_config(&config)?;
  session.run()?;
  Ok(())
}

fn main() -> ExitCode {
  let args = Args::parse();
  init_log(args.quiet);

  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("mipstat: {}", e);
      ExitCode::FAILURE
    },
  }
}
