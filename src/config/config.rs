use crate::error::{Error, Result};
use crate::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("default.toml");

/// Trace input section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TraceSection {
  #[serde(default = "default_trace_path")]
  pub path: String,
  /// Upper bound on trace entries; unlimited when absent.
  #[serde(default)]
  pub max_entries: Option<usize>,
}

fn default_trace_path() -> String {
  "trace.txt".to_string()
}

impl Default for TraceSection {
  fn default() -> Self {
    Self {
      path: default_trace_path(),
      max_entries: None,
    }
  }
}

/// Report output section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportSection {
  #[serde(default = "default_report_path")]
  pub path: String,
  #[serde(default)]
  pub format: ReportFormat,
}

fn default_report_path() -> String {
  "statistics.txt".to_string()
}

impl Default for ReportSection {
  fn default() -> Self {
    Self {
      path: default_report_path(),
      format: ReportFormat::Text,
    }
  }
}

/// Analysis behaviour
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AnalysisSection {
  /// Fail instead of reporting negative register counters.
  #[serde(default)]
  pub strict: bool,
  #[serde(default)]
  pub step_mode: bool,
  #[serde(default)]
  pub quiet: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
  #[serde(default)]
  pub trace: TraceSection,
  #[serde(default)]
  pub report: ReportSection,
  #[serde(default)]
  pub analysis: AnalysisSection,
}

/// Values taken from the command line. `None`/`false` leaves the config alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
  pub trace: Option<String>,
  pub output: Option<String>,
  pub format: Option<ReportFormat>,
  pub max_entries: Option<usize>,
  pub strict: bool,
  pub step: bool,
  pub quiet: bool,
}

pub fn load_default_config() -> Result<AppConfig> {
  parse_config(DEFAULT_CONFIG)
}

pub fn load_config_file(path: &Path) -> Result<AppConfig> {
  let content = fs::read_to_string(path)
    .map_err(|e| Error::Config(format!("cannot read config file {:?}: {}", path, e)))?;
  parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig> {
  toml::from_str::<AppConfig>(content).map_err(|e| Error::Config(format!("failed to parse TOML config: {}", e)))
}

/// Merge two configs, the second one wins where it sets something.
pub fn merge_config(mut base: AppConfig, override_config: AppConfig) -> AppConfig {
  if !override_config.trace.path.is_empty() {
    base.trace.path = override_config.trace.path;
  }
  if override_config.trace.max_entries.is_some() {
    base.trace.max_entries = override_config.trace.max_entries;
  }

  if !override_config.report.path.is_empty() {
    base.report.path = override_config.report.path;
  }
  if override_config.report.format != ReportFormat::default() {
    base.report.format = override_config.report.format;
  }

  base.analysis.strict |= override_config.analysis.strict;
  base.analysis.step_mode |= override_config.analysis.step_mode;
  base.analysis.quiet |= override_config.analysis.quiet;

  base
}

pub fn apply_cli_overrides(config: &mut AppConfig, cli: &CliOverrides) {
  if let Some(trace) = &cli.trace {
    config.trace.path = trace.clone();
  }
  if let Some(output) = &cli.output {
    config.report.path = output.clone();
  }
  if let Some(format) = cli.format {
    config.report.format = format;
  }
  if let Some(limit) = cli.max_entries {
    config.trace.max_entries = Some(limit);
  }
  if cli.strict {
    config.analysis.strict = true;
  }
  if cli.step {
    config.analysis.step_mode = true;
  }
  if cli.quiet {
    config.analysis.quiet = true;
  }
}

pub fn validate_config(config: &AppConfig) -> Result<()> {
  if config.trace.path.trim().is_empty() {
    return Err(Error::Config("trace path cannot be empty".to_string()));
  }
  if config.report.path.trim().is_empty() {
    return Err(Error::Config("report path cannot be empty".to_string()));
  }
  if config.trace.max_entries == Some(0) {
    return Err(Error::Config("max_entries must be greater than 0".to_string()));
  }
  Ok(())
}

/// Load and merge configs
///
/// 1. embedded defaults
/// 2. optional user file merged on top
/// 3. command line overrides
/// 4. validation
pub fn load_and_merge_configs(custom_config_path: Option<&Path>, cli: &CliOverrides) -> Result<AppConfig> {
  let mut config = load_default_config()?;

  if let Some(path) = custom_config_path {
    log::debug!("loading config file {:?}", path);
    let custom = load_config_file(path)?;
    config = merge_config(config, custom);
  }

  apply_cli_overrides(&mut config, cli);
  validate_config(&config)?;

  log::debug!("resolved config: {:?}", config);
  Ok(config)
}
