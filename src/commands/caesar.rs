//! Caesar command - fixed-shift text ciphering.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use tabula::{Action, KeySpec};

use super::{load_session, now, read_text, write_text, CommandExecutor};

/// Cipher text with a single fixed shift.
///
/// The key must be at least 1 and smaller than every alphabet declared in
/// the settings. Decoding is rate-limited: repeating the same text too often
/// inside the configured window locks the session.
#[derive(Args, Debug)]
pub struct CaesarCommand {
    /// Shift key
    #[arg(short, long)]
    pub key: i64,

    /// Text to cipher (mutually exclusive with --input)
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text from a UTF-8 file (stdin when neither is given)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Decode instead of encode
    #[arg(short, long)]
    pub decode: bool,

    /// Fail on characters outside the alphabets and the allowed set
    #[arg(long)]
    pub strict: bool,

    /// Settings file (defaults to the SETTINGS_PATH environment variable)
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Verbose output (alphabet and history statistics)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for CaesarCommand {
    fn execute(&self) -> Result<()> {
        let mut session = load_session(self.settings.as_deref())?;
        let text = read_text(self.text.as_deref(), self.input.as_deref())?;

        let action = if self.decode {
            Action::Decode
        } else {
            Action::Encode
        };
        let key = KeySpec::FixedShift { key: self.key };

        if self.verbose {
            eprintln!("{} alphabets configured", session.table().len());
        }

        let result = session.transform_text(&text, &key, action, self.strict, now())?;

        if self.verbose {
            eprintln!(
                "{}d {} characters ({} requests recorded)",
                action,
                text.chars().count(),
                session.detector().history().len()
            );
        }

        write_text(&result, self.output.as_deref())
    }
}
