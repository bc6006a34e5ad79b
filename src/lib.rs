//! MIPS32 trace statistics: decode a trace of executed instructions and
//! report type mix, branch behaviour and per-register traffic.

pub mod config;
pub mod decoder;
pub mod error;
pub mod report;
pub mod session;
pub mod stats;
pub mod trace;
pub mod utils;

pub use decoder::{decode, InstType, Instruction};
pub use error::{Error, Result};
pub use report::ReportFormat;
pub use session::Session;
pub use stats::{aggregate, aggregate_raw, Aggregator, Stats};
