//! Report output
//!
//! `text` is the line oriented statistics file; `json` carries the same
//! counters for tooling.

pub mod json;
pub mod text;

use crate::error::{Error, Result};
use crate::stats::Stats;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

pub use text::percent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
  #[default]
  Text,
  Json,
}

impl FromStr for ReportFormat {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().as_str() {
      "text" => Ok(ReportFormat::Text),
      "json" => Ok(ReportFormat::Json),
      other => Err(Error::Config(format!("unknown report format: {}", other))),
    }
  }
}

pub fn render(stats: &Stats, format: ReportFormat) -> Result<String> {
  match format {
    ReportFormat::Text => Ok(text::render(stats)),
    ReportFormat::Json => Ok(json::render(stats)?),
  }
}

/// Render and write the report to `path`, replacing any existing file.
pub fn write_report(path: &Path, stats: &Stats, format: ReportFormat) -> Result<()> {
  let body = render(stats, format)?;
  fs::write(path, body).map_err(|e| output_error(path, e))?;
  log::info!("wrote {:?} report to {:?}", format, path);
  Ok(())
}

fn output_error(path: &Path, source: io::Error) -> Error {
  Error::OutputUnavailable {
    path: path.to_path_buf(),
    source,
  }
}
