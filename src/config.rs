//! Settings document: alphabets, pass-through set, and detector knobs.
//!
//! The document is JSON, conventionally named by the `SETTINGS_PATH`
//! environment variable:
//!
//! ```json
//! {
//!     "alphabets": { "latin": "AaBbCcDdEeFf" },
//!     "valid_chars": " .,!?",
//!     "tries": 3,
//!     "drop_tries": 60
//! }
//! ```
//!
//! `alphabets` maps each alphabet name to its full character-set string,
//! `valid_chars` lists the characters strict validation lets through
//! unchanged, `tries` is the decode-attempt ceiling, and `drop_tries` the
//! window length in seconds over which attempts are counted.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alphabet::{AlphabetError, AlphabetTable};

/// Environment variable naming the settings file.
pub const SETTINGS_PATH_VAR: &str = "SETTINGS_PATH";

/// Errors raised while loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `SETTINGS_PATH` is not set.
    #[error("the SETTINGS_PATH environment variable names no settings file")]
    MissingPath,

    /// Settings file could not be read.
    #[error("cannot read settings file '{path}': {source}")]
    Unreadable {
        /// Path that failed to load.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not a valid settings document.
    #[error("malformed settings file '{path}': {source}")]
    Malformed {
        /// Path that failed to parse.
        path: String,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// No alphabets declared.
    #[error("settings declare no alphabets")]
    NoAlphabets,

    /// The detector ceiling must allow at least one attempt.
    #[error("tries must be at least 1")]
    InvalidTries,

    /// Alphabet construction failed.
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
}

/// Parsed settings document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Alphabet name to character-set string. Ordered, so redefined
    /// characters override deterministically.
    pub alphabets: BTreeMap<String, String>,

    /// Characters strict validation lets through unchanged.
    #[serde(default)]
    pub valid_chars: String,

    /// Decode attempts allowed per window before the block trips.
    pub tries: usize,

    /// Window length in seconds for counting attempts.
    pub drop_tries: u64,
}

impl Settings {
    /// Reads and validates the settings document at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Malformed {
                path: path.display().to_string(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads the settings file named by `SETTINGS_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(SETTINGS_PATH_VAR).map_err(|_| ConfigError::MissingPath)?;
        Self::from_path(path)
    }

    /// Checks document-level constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabets.is_empty() {
            return Err(ConfigError::NoAlphabets);
        }
        if self.tries < 1 {
            return Err(ConfigError::InvalidTries);
        }
        Ok(())
    }

    /// Builds the alphabet lookup tables from the declared character sets.
    pub fn build_table(&self) -> Result<AlphabetTable, ConfigError> {
        let mut table = AlphabetTable::new();
        for (name, characters) in &self.alphabets {
            table.add_alphabet(name, characters)?;
        }
        Ok(table)
    }
}
