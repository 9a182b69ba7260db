//! Command modules - one strategy per cipher operation.
//!
//! Each command is a separate module holding its parsed arguments and
//! implementing the [`CommandExecutor`] trait, plus the small shared helpers
//! for settings loading and text I/O.

mod caesar;
mod file;
mod tabula;

pub use caesar::CaesarCommand;
pub use file::FileCommand;
pub use tabula::TabulaCommand;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use ::tabula::{Session, Settings};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements this trait
/// to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Loads settings from the explicit path, or from `SETTINGS_PATH` when no
/// path was given, and builds the session context.
pub(crate) fn load_session(path: Option<&Path>) -> Result<Session> {
    let settings = match path {
        Some(path) => Settings::from_path(path),
        None => Settings::from_env(),
    }?;
    Ok(Session::from_settings(&settings)?)
}

/// Resolves the text operand: inline argument, input file, or stdin.
pub(crate) fn read_text(text: Option<&str>, input: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = input {
        return fs::read_to_string(path)
            .with_context(|| format!("cannot read '{}'", path.display()));
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("cannot read text from stdin")?;
    Ok(buffer)
}

/// Writes the result to the output file, or prints it to stdout.
pub(crate) fn write_text(result: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, result)
            .with_context(|| format!("cannot write '{}'", path.display())),
        None => {
            println!("{result}");
            Ok(())
        }
    }
}

/// Current time as seconds since the Unix epoch.
pub(crate) fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
