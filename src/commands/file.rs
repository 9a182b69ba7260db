//! File command - byte ciphering over the 256-value alphabet.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tabula::cipher::{file, Action};

use super::CommandExecutor;

/// Cipher a file's raw bytes with a fixed shift.
///
/// Needs no settings: the alphabet is the full byte range. With
/// --use-index, each byte's position is mixed into the value before the
/// shift, so identical bytes cipher differently across the file.
#[derive(Args, Debug)]
pub struct FileCommand {
    /// Shift key in [1, 255]
    #[arg(short, long)]
    pub key: i64,

    /// File to cipher
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the result
    #[arg(short, long)]
    pub output: PathBuf,

    /// Decode instead of encode
    #[arg(short, long)]
    pub decode: bool,

    /// Mix each byte's position into the value before shifting
    #[arg(long)]
    pub use_index: bool,

    /// Verbose output (byte counts)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for FileCommand {
    fn execute(&self) -> Result<()> {
        let bytes = fs::read(&self.input)
            .with_context(|| format!("cannot read '{}'", self.input.display()))?;

        let action = if self.decode {
            Action::Decode
        } else {
            Action::Encode
        };

        let result = file::transform(&bytes, self.key, action, self.use_index)?;

        fs::write(&self.output, &result)
            .with_context(|| format!("cannot write '{}'", self.output.display()))?;

        if self.verbose {
            eprintln!(
                "{}d {} bytes into '{}'",
                action,
                result.len(),
                self.output.display()
            );
        }

        Ok(())
    }
}
