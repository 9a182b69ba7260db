//! Tabula command - tabula recta text ciphering with position-varying keys.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use tabula::{Action, KeySpec};

use super::{load_session, now, read_text, write_text, CommandExecutor};

/// Cipher text with a tabula recta key schedule.
///
/// The schedule comes either from a key vector (-a and -b, with an optional
/// -c selecting the quadratic form) or from a repeating keyword whose
/// character codes drive the shift. Decoding is rate-limited the same way as
/// the Caesar command.
#[derive(Args, Debug)]
pub struct TabulaCommand {
    /// First vector coefficient (requires -b; mutually exclusive with --word)
    #[arg(short = 'a', long = "key-a", requires = "b", conflicts_with = "word")]
    pub a: Option<i64>,

    /// Second vector coefficient (requires -a)
    #[arg(short = 'b', long = "key-b", requires = "a")]
    pub b: Option<i64>,

    /// Third vector coefficient; selects the quadratic schedule when given
    #[arg(short = 'c', long = "key-c", requires = "a")]
    pub c: Option<i64>,

    /// Keyword whose character codes drive the schedule
    #[arg(short, long, conflicts_with = "a")]
    pub word: Option<String>,

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

impl TabulaCommand {
    /// Builds the key schedule from the vector or keyword arguments.
    fn key_spec(&self) -> Result<KeySpec> {
        if let Some(word) = &self.word {
            return Ok(KeySpec::Keyword { word: word.clone() });
        }
        match (self.a, self.b) {
            (Some(a), Some(b)) => Ok(KeySpec::vector(a, b, self.c.unwrap_or(0))?),
            _ => bail!("either --word or both -a and -b are required"),
        }
    }
}

impl CommandExecutor for TabulaCommand {
    fn execute(&self) -> Result<()> {
        let mut session = load_session(self.settings.as_deref())?;
        let text = read_text(self.text.as_deref(), self.input.as_deref())?;

        let action = if self.decode {
            Action::Decode
        } else {
            Action::Encode
        };
        let key = self.key_spec()?;

        if self.verbose {
            eprintln!("schedule: {key}");
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
