//! Long-lived cipher session.
//!
//! A [`Session`] owns everything a run of the workbench needs: the built
//! alphabet tables, the pass-through set, and the attack detector's mutable
//! history. It is constructed once from [`Settings`] at startup and passed
//! into every operation, and it encodes the detector's call discipline so
//! callers cannot forget it: decode requests are checked against the window
//! before ciphering, and every text request is recorded afterwards whatever
//! the cipher outcome was.

use thiserror::Error;

use crate::alphabet::AlphabetTable;
use crate::cipher::text::{self, TextOptions};
use crate::cipher::{file, Action, CipherError, KeySpec};
use crate::config::{ConfigError, Settings};
use crate::detector::{AttackDetector, RateLimited};

/// Failures surfaced by session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The cipher engine rejected the request.
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// The detector refused the request.
    #[error(transparent)]
    RateLimited(#[from] RateLimited),
}

/// One running workbench: immutable lookup tables plus the mutable attempt
/// history.
#[derive(Debug)]
pub struct Session {
    table: AlphabetTable,
    pass_through: String,
    detector: AttackDetector,
}

impl Session {
    /// Builds a session from validated settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        Ok(Self {
            table: settings.build_table()?,
            pass_through: settings.valid_chars.clone(),
            detector: AttackDetector::new(settings.tries, settings.drop_tries),
        })
    }

    /// The alphabet tables this session was configured with.
    pub fn table(&self) -> &AlphabetTable {
        &self.table
    }

    /// The detector state, for inspection.
    pub fn detector(&self) -> &AttackDetector {
        &self.detector
    }

    /// Runs a text transform under the detector's call discipline.
    ///
    /// Decode requests consult the window first; the request is recorded
    /// after the cipher ran, whether or not it succeeded, so failed decode
    /// attempts still count toward the ceiling.
    pub fn transform_text(
        &mut self,
        text: &str,
        key: &KeySpec,
        action: Action,
        strict: bool,
        now: u64,
    ) -> Result<String, SessionError> {
        if action == Action::Decode {
            self.detector.check(text, action, now)?;
        }

        let options = TextOptions {
            strict,
            pass_through: self.pass_through.clone(),
        };
        let outcome = text::transform(&self.table, text, key, action, &options);

        self.detector.insert(text, &key.to_string(), action, now)?;
        Ok(outcome?)
    }

    /// Runs a byte transform.
    ///
    /// File requests are not text-keyed, so the detector is not consulted.
    pub fn transform_file(
        &self,
        bytes: &[u8],
        key: i64,
        action: Action,
        use_index: bool,
    ) -> Result<Vec<u8>, SessionError> {
        Ok(file::transform(bytes, key, action, use_index)?)
    }
}
