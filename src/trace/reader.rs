use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One `(addr, word)` pair and the line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry {
  pub line: usize,
  pub addr: u64,
  pub word: u32,
}

/// Streams trace entries out of any buffered reader, in file order.
///
/// Blank lines are skipped. Every other line must hold exactly two hex
/// tokens; a `0x` prefix is accepted on either.
pub struct TraceReader<R> {
  source: PathBuf,
  lines: std::io::Lines<R>,
  line_no: usize,
  count: usize,
  max_entries: Option<usize>,
  done: bool,
}

impl<R: BufRead> TraceReader<R> {
  pub fn new(reader: R, source: impl Into<PathBuf>, max_entries: Option<usize>) -> Self {
    Self {
      source: source.into(),
      lines: reader.lines(),
      line_no: 0,
      count: 0,
      max_entries,
      done: false,
    }
  }

  fn next_entry(&mut self) -> Option<Result<TraceEntry>> {
    loop {
      let line = match self.lines.next()? {
        Ok(line) => line,
        // a line that isn't UTF-8 is bad trace content, not a failed read
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
          return Some(Err(Error::MalformedTrace {
            line: self.line_no + 1,
            content: String::new(),
            reason: "invalid UTF-8".to_string(),
          }))
        },
        Err(e) => {
          return Some(Err(Error::InputUnavailable {
            path: self.source.clone(),
            source: e,
          }))
        },
      };
      self.line_no += 1;

      let entry = match parse_line(self.line_no, &line) {
        Ok(Some(entry)) => entry,
        Ok(None) => continue,
        Err(e) => return Some(Err(e)),
      };

      if let Some(limit) = self.max_entries {
        if self.count >= limit {
          return Some(Err(Error::TraceTooLong { limit }));
        }
      }
      self.count += 1;
      return Some(Ok(entry));
    }
  }
}

impl<R: BufRead> Iterator for TraceReader<R> {
  type Item = Result<TraceEntry>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    let item = self.next_entry();
    // stop after the first error so callers can't skip past a bad line
    if !matches!(item, Some(Ok(_))) {
      self.done = true;
    }
    item
  }
}

/// Open a trace file for streaming.
pub fn open_trace(path: &Path, max_entries: Option<usize>) -> Result<TraceReader<BufReader<File>>> {
  let file = File::open(path).map_err(|e| Error::InputUnavailable {
    path: path.to_path_buf(),
    source: e,
  })?;
  log::debug!("opened trace {:?}", path);
  Ok(TraceReader::new(BufReader::new(file), path, max_entries))
}

/// Read a whole trace file into memory.
pub fn read_trace(path: &Path, max_entries: Option<usize>) -> Result<Vec<TraceEntry>> {
  open_trace(path, max_entries)?.collect()
}

/// Parse trace text already held in memory.
pub fn parse_trace(text: &str, max_entries: Option<usize>) -> Result<Vec<TraceEntry>> {
  TraceReader::new(text.as_bytes(), "<memory>", max_entries).collect()
}

/// Parse one line. `Ok(None)` for a blank line.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<TraceEntry>> {
  let parts: Vec<&str> = line.split_whitespace().collect();
  if parts.is_empty() {
    return Ok(None);
  }
  let malformed = |reason: String| Error::MalformedTrace {
    line: line_no,
    content: line.trim().to_string(),
    reason,
  };

  if parts.len() != 2 {
    return Err(malformed(format!("expected 2 hex tokens, got {}", parts.len())));
  }

  let addr = u64::from_str_radix(strip_hex_prefix(parts[0]), 16)
    .map_err(|e| malformed(format!("invalid address '{}': {}", parts[0], e)))?;
  let word = u32::from_str_radix(strip_hex_prefix(parts[1]), 16)
    .map_err(|e| malformed(format!("invalid word '{}': {}", parts[1], e)))?;

  Ok(Some(TraceEntry {
    line: line_no,
    addr,
    word,
  }))
}

fn strip_hex_prefix(s: &str) -> &str {
  s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}
