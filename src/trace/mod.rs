//! Text trace input: one `addr word` hex pair per line.

pub mod reader;

pub use reader::{open_trace, parse_line, parse_trace, read_trace, TraceEntry, TraceReader};
