use crate::error::{Error, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  Step(u32), // Step N instructions
  Print,
  Continue,
  Quit,
}

/// Where step mode gets its next command from.
pub trait CommandSource {
  fn read_command(&mut self) -> Result<Command>;
}

pub const HELP: &str = "Enter to step, 'si N' to step N, 'p' to print stats, 'c' to continue, 'q' to quit";

/// Parse one line of shell input.
pub fn parse_command(line: &str) -> std::result::Result<Command, String> {
  let trimmed = line.trim();

  // Empty input: step once
  if trimmed.is_empty() {
    return Ok(Command::Step(1));
  }

  if let Some(rest) = trimmed.strip_prefix("si") {
    let num_str = rest.trim();
    if num_str.is_empty() {
      return Err("'si' requires a number, e.g., 'si 100'".to_string());
    }
    return match num_str.parse::<u32>() {
      Ok(n) if n > 0 => Ok(Command::Step(n)),
      Ok(_) => Err("step count must be greater than 0".to_string()),
      Err(e) => Err(format!("invalid number '{}': {}", num_str, e)),
    };
  }

  match trimmed {
    "p" => Ok(Command::Print),
    "c" => Ok(Command::Continue),
    "q" => Ok(Command::Quit),
    _ => Err(format!("Unknown command: '{}'. {}", trimmed, HELP)),
  }
}

/// Interactive line editor used by step mode.
pub struct Shell {
  editor: DefaultEditor,
}

impl Shell {
  pub fn new() -> Result<Self> {
    let editor = DefaultEditor::new().map_err(|e| Error::Shell(e.to_string()))?;
    Ok(Self { editor })
  }
}

impl CommandSource for Shell {
  fn read_command(&mut self) -> Result<Command> {
    loop {
      match self.editor.readline("(mipstat) ") {
        Ok(line) => {
          let trimmed = line.trim();
          if !trimmed.is_empty() {
            let _ = self.editor.add_history_entry(trimmed);
          }
          match parse_command(trimmed) {
            Ok(cmd) => return Ok(cmd),
            Err(msg) => eprintln!("Error: {}", msg),
          }
        },
        // Ctrl-C / Ctrl-D: quit
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(Command::Quit),
        Err(err) => return Err(Error::Shell(err.to_string())),
      }
    }
  }
}

/// Replays a fixed list of commands, then quits.
#[derive(Debug, Default)]
pub struct ScriptedCommands {
  commands: std::collections::VecDeque<Command>,
}

impl ScriptedCommands {
  pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
    Self {
      commands: commands.into_iter().collect(),
    }
  }
}

impl CommandSource for ScriptedCommands {
  fn read_command(&mut self) -> Result<Command> {
    Ok(self.commands.pop_front().unwrap_or(Command::Quit))
  }
}
