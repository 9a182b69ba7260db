//! Per-position key schedules.
//!
//! A [`KeySpec`] names the key material for one request; binding it to an
//! alphabet table yields a [`KeySchedule`] that answers "what key applies at
//! position `i`". Positions count every character of the input, mapped or
//! not, so pass-through characters still advance the schedule.

use std::fmt;

use crate::alphabet::AlphabetTable;

use super::CipherError;

/// Key material for one cipher request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySpec {
    /// Single fixed shift applied at every position.
    FixedShift {
        /// Shift amount; must be at least 1.
        key: i64,
    },

    /// Linear key vector: position `i` uses `a*i + b`.
    LinearVector {
        /// Slope coefficient; must be at least 1.
        a: i64,
        /// Constant coefficient; must be at least 1.
        b: i64,
    },

    /// Quadratic key vector: position `i` uses `a*i² + b*i + c`.
    QuadraticVector {
        /// Quadratic coefficient; must be at least 1.
        a: i64,
        /// Linear coefficient; must be at least 1.
        b: i64,
        /// Constant coefficient; must be at least 1.
        c: i64,
    },

    /// Repeating keyword: position `i` uses the alphabet code of
    /// `word[i mod word_len]`.
    Keyword {
        /// The keyword; must not be empty.
        word: String,
    },
}

impl KeySpec {
    /// Builds a vector key from a single `(a, b, c)` entry: `c == 0` selects
    /// the linear schedule, `c > 0` the quadratic one, negative `c` is
    /// rejected.
    pub fn vector(a: i64, b: i64, c: i64) -> Result<Self, CipherError> {
        if a < 1 || b < 1 {
            return Err(CipherError::InvalidKey(
                "vector keys must not be less than 1".into(),
            ));
        }
        match c {
            0 => Ok(KeySpec::LinearVector { a, b }),
            c if c > 0 => Ok(KeySpec::QuadraticVector { a, b, c }),
            _ => Err(CipherError::InvalidKey(
                "key c must not be less than 0".into(),
            )),
        }
    }

    /// Checks the variant's parameter constraints.
    pub fn validate(&self) -> Result<(), CipherError> {
        match self {
            KeySpec::FixedShift { key } if *key < 1 => Err(CipherError::InvalidKey(
                "key must be greater than 0".into(),
            )),
            KeySpec::LinearVector { a, b } if *a < 1 || *b < 1 => Err(CipherError::InvalidKey(
                "vector keys must not be less than 1".into(),
            )),
            KeySpec::QuadraticVector { a, b, c } if *a < 1 || *b < 1 || *c < 1 => Err(
                CipherError::InvalidKey("vector keys must not be less than 1".into()),
            ),
            KeySpec::Keyword { word } if word.is_empty() => Err(CipherError::InvalidKey(
                "keyword must not be empty".into(),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySpec::FixedShift { key } => write!(f, "shift:{key}"),
            KeySpec::LinearVector { a, b } => write!(f, "vector:{a},{b}"),
            KeySpec::QuadraticVector { a, b, c } => write!(f, "vector:{a},{b},{c}"),
            KeySpec::Keyword { word } => write!(f, "keyword:{word}"),
        }
    }
}

/// A [`KeySpec`] bound to an alphabet table, queryable per position.
///
/// Binding validates the parameter constraints once. Keyword code lookups
/// stay lazy: an unmapped keyword character only fails at the positions that
/// actually use it, matching how short inputs never touch the keyword's
/// tail.
pub struct KeySchedule<'a> {
    spec: &'a KeySpec,
    keyword: Vec<(char, Option<i64>)>,
}

impl<'a> KeySchedule<'a> {
    /// Validates `spec` and resolves keyword characters against `table`.
    pub fn bind(spec: &'a KeySpec, table: &AlphabetTable) -> Result<Self, CipherError> {
        spec.validate()?;
        let keyword = match spec {
            KeySpec::Keyword { word } => word
                .chars()
                .map(|c| (c, table.code_of(c).map(|code| code as i64)))
                .collect(),
            _ => Vec::new(),
        };
        Ok(Self { spec, keyword })
    }

    /// The key for zero-based position `i`.
    pub fn key_at(&self, i: usize) -> Result<i64, CipherError> {
        let p = i as i64;
        match self.spec {
            KeySpec::FixedShift { key } => Ok(*key),
            KeySpec::LinearVector { a, b } => Ok(a * p + b),
            KeySpec::QuadraticVector { a, b, c } => Ok(a * p * p + b * p + c),
            KeySpec::Keyword { .. } => {
                let (c, code) = self.keyword[i % self.keyword.len()];
                code.ok_or(CipherError::InvalidCharacter(c))
            }
        }
    }
}
