//! Case-partitioned alphabet tables.
//!
//! An alphabet is declared as a single character-set string mixing cases,
//! e.g. `"AaBbCc"`. Construction splits it into its lowercase and uppercase
//! subsequences, assigns each a dense code sequence in order of first
//! appearance (duplicates collapse to the first-seen code), and takes the
//! canonical symbol list from whichever subsequence is longer. Both case
//! variants of a character resolve to the same alphabet and the same
//! effective length, so `'b'` and `'B'` share a modulus even when one case
//! list is shorter than the other.

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while building alphabet tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// Alphabet declared with an empty character set.
    #[error("alphabet '{0}' has no characters")]
    EmptyAlphabet(String),

    /// Alphabet declared with no lowercase or uppercase characters at all,
    /// leaving nothing to substitute over.
    #[error("alphabet '{0}' has no cased characters")]
    NoCasedCharacters(String),
}

/// Case classification of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCase {
    /// Lowercase letter.
    Lower,
    /// Uppercase letter.
    Upper,
    /// Neither case (digits, punctuation, whitespace).
    Other,
}

/// Returns the case tag of `c`.
pub fn case_of(c: char) -> CharCase {
    if c.is_lowercase() {
        CharCase::Lower
    } else if c.is_uppercase() {
        CharCase::Upper
    } else {
        CharCase::Other
    }
}

/// One named alphabet: its canonical symbol list and length.
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// Canonical symbols, taken from the longer case subsequence.
    pub symbols: Vec<char>,
    /// Effective modulus for substitution; equals `symbols.len()`.
    pub length: usize,
}

/// Code entry for a single character.
#[derive(Debug, Clone)]
pub struct CharEntry {
    /// Dense code within the character's case subsequence.
    pub code: usize,
    /// Effective length of the owning alphabet.
    pub length: usize,
    /// Name of the owning alphabet.
    pub alphabet: String,
}

/// Lookup tables over every configured alphabet.
///
/// Built once at startup and immutable afterwards. A character resolves to
/// at most one alphabet; if a later character set redefines a character, the
/// later definition wins.
#[derive(Debug, Clone, Default)]
pub struct AlphabetTable {
    chars: HashMap<char, CharEntry>,
    alphabets: HashMap<String, Alphabet>,
}

impl AlphabetTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and registers one alphabet from its character-set string.
    ///
    /// The set is split into lowercase and uppercase subsequences; each gets
    /// dense 0-based codes by first appearance. The canonical symbol list is
    /// the longer subsequence (equal lengths canonicalize to uppercase), and
    /// every character of both subsequences maps to that list's length.
    pub fn add_alphabet(&mut self, name: &str, characters: &str) -> Result<(), AlphabetError> {
        if characters.is_empty() {
            return Err(AlphabetError::EmptyAlphabet(name.to_string()));
        }

        let lower = first_appearance(characters, CharCase::Lower);
        let upper = first_appearance(characters, CharCase::Upper);

        let canonical = if lower.len() > upper.len() {
            &lower
        } else {
            &upper
        };
        let length = canonical.len();
        if length == 0 {
            return Err(AlphabetError::NoCasedCharacters(name.to_string()));
        }

        for seq in [&lower, &upper] {
            for (code, &c) in seq.iter().enumerate() {
                self.chars.insert(
                    c,
                    CharEntry {
                        code,
                        length,
                        alphabet: name.to_string(),
                    },
                );
            }
        }
        self.alphabets.insert(
            name.to_string(),
            Alphabet {
                symbols: canonical.clone(),
                length,
            },
        );
        Ok(())
    }

    /// Resolves a character to its code entry and owning alphabet.
    ///
    /// Returns `None` for unmapped characters.
    pub fn resolve(&self, c: char) -> Option<(&CharEntry, &Alphabet)> {
        let entry = self.chars.get(&c)?;
        let alphabet = self.alphabets.get(&entry.alphabet)?;
        Some((entry, alphabet))
    }

    /// The dense code of `c`, if it is mapped.
    pub fn code_of(&self, c: char) -> Option<usize> {
        self.chars.get(&c).map(|entry| entry.code)
    }

    /// Looks up an alphabet by name.
    pub fn alphabet(&self, name: &str) -> Option<&Alphabet> {
        self.alphabets.get(name)
    }

    /// Iterates over all registered alphabets.
    pub fn alphabets(&self) -> impl Iterator<Item = (&String, &Alphabet)> {
        self.alphabets.iter()
    }

    /// Number of registered alphabets.
    pub fn len(&self) -> usize {
        self.alphabets.len()
    }

    /// Whether no alphabet has been registered.
    pub fn is_empty(&self) -> bool {
        self.alphabets.is_empty()
    }
}

/// Collects the characters of `case` in order of first appearance.
fn first_appearance(characters: &str, case: CharCase) -> Vec<char> {
    let mut seq = Vec::new();
    for c in characters.chars() {
        if case_of(c) == case && !seq.contains(&c) {
            seq.push(c);
        }
    }
    seq
}
