pub mod session;
pub mod shell;

pub use session::{check_non_negative, run_files, Session, StepMode};
pub use shell::{Command, CommandSource, ScriptedCommands, Shell};
