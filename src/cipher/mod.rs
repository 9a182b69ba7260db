//! Cipher engines: the modular substitution core, key schedules, and the
//! text and byte transforms built on them.
//!
//! - [`caesar`]: leaf encode/decode steps, exact modular inverses
//! - [`schedule`]: per-position key derivation from a [`KeySpec`]
//! - [`text`]: fixed Caesar and tabula recta text transforms
//! - [`file`]: byte cipher over the full 256-value alphabet

pub mod caesar;
pub mod file;
pub mod schedule;
pub mod text;

use std::fmt;

use thiserror::Error;

pub use schedule::{KeySchedule, KeySpec};

/// Errors produced by the cipher engines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Key outside the range the requested mode accepts.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Character present in neither the configured alphabets nor the
    /// pass-through set, rejected by strict validation; also raised for
    /// keyword characters missing from every alphabet.
    #[error("invalid character: '{0}'")]
    InvalidCharacter(char),
}

/// Direction of a cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Plain to cipher.
    Encode,
    /// Cipher to plain.
    Decode,
}

impl Action {
    /// Applies the modular step for this direction.
    pub fn step(self, code: i64, length: i64, key: i64) -> i64 {
        match self {
            Action::Encode => caesar::encode_step(code, length, key),
            Action::Decode => caesar::decode_step(code, length, key),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Encode => write!(f, "encode"),
            Action::Decode => write!(f, "decode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_steps_are_inverse() {
        let encoded = Action::Encode.step(4, 26, 9);
        assert_eq!(Action::Decode.step(encoded, 26, 9), 4);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Encode.to_string(), "encode");
        assert_eq!(Action::Decode.to_string(), "decode");
    }
}
