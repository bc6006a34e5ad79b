use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot read trace {path:?}: {source}")]
  InputUnavailable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("cannot write report {path:?}: {source}")]
  OutputUnavailable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("malformed trace at line {line}: {reason} (`{content}`)")]
  MalformedTrace { line: usize, content: String, reason: String },

  #[error("trace has more than {limit} entries")]
  TraceTooLong { limit: usize },

  #[error("config error: {0}")]
  Config(String),

  #[error("reg-{reg} went negative (read={read}, write={write})")]
  NegativeRegister { reg: usize, read: i64, write: i64 },

  #[error("report encoding failed: {0}")]
  Encode(#[from] serde_json::Error),

  #[error("shell error: {0}")]
  Shell(String),
}

pub type Result<T> = std::result::Result<T, Error>;
