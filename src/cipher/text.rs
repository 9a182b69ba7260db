//! Text transforms: fixed Caesar and the tabula recta modes.
//!
//! The transform walks the input left to right, position-indexed from 0 over
//! the whole string. Mapped characters are shifted within their alphabet by
//! the key the schedule yields for that position and written back with the
//! input character's case. Unmapped characters pass through unchanged unless
//! strict validation rejects them. Output length always equals input length.

use crate::alphabet::{case_of, AlphabetTable, CharCase};

use super::schedule::{KeySchedule, KeySpec};
use super::{Action, CipherError};

/// Configuration for a text transform.
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    /// Fail on characters outside the alphabets and the pass-through set.
    pub strict: bool,
    /// Characters allowed through strict validation unchanged.
    pub pass_through: String,
}

/// Transforms `text` with `key` in the direction of `action`.
///
/// The fixed Caesar mode additionally requires the key to be smaller than
/// every configured alphabet's length; the vector and keyword schedules
/// carry no upper bound because the modular step absorbs any magnitude.
pub fn transform(
    table: &AlphabetTable,
    text: &str,
    key: &KeySpec,
    action: Action,
    options: &TextOptions,
) -> Result<String, CipherError> {
    let schedule = KeySchedule::bind(key, table)?;

    if let KeySpec::FixedShift { key } = key {
        if table.alphabets().any(|(_, a)| a.length as i64 <= *key) {
            return Err(CipherError::InvalidKey(
                "key must be smaller than every alphabet's length".into(),
            ));
        }
    }

    let mut result = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match table.resolve(c) {
            Some((entry, alphabet)) => {
                let key_i = schedule.key_at(i)?;
                let new_code = action.step(entry.code as i64, entry.length as i64, key_i);
                let substituted = alphabet.symbols[new_code as usize];
                result.push(restore_case(c, substituted));
            }
            None if options.strict && !options.pass_through.contains(c) => {
                return Err(CipherError::InvalidCharacter(c));
            }
            None => result.push(c),
        }
    }
    Ok(result)
}

/// Carries the input character's case onto the substituted symbol.
///
/// The canonical symbol list holds only one case, so the substituted
/// character is re-cased from the input: lowercase input stays lowercase,
/// everything else uppercases.
fn restore_case(original: char, substituted: char) -> char {
    match case_of(original) {
        CharCase::Lower => substituted.to_lowercase().next().unwrap_or(substituted),
        _ => substituted.to_uppercase().next().unwrap_or(substituted),
    }
}
