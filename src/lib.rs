//! # Tabula - configurable polyalphabetic substitution ciphers
//!
//! Tabula implements classical substitution ciphers over alphabets declared
//! at runtime: a fixed-key Caesar shift, Trithemius/tabula recta variants
//! whose shift varies by position (linear, quadratic, or keyword-driven key
//! schedules), and a byte-oriented file cipher over the full 256-value
//! alphabet. Decode requests are gated by an attack detector that counts
//! repeated attempts inside a trailing time window and locks the session
//! permanently once the ceiling is reached.
//!
//! These are classical ciphers: useful for studying substitution and key
//! schedules, with no cryptographic strength claims.
//!
//! ## Architecture
//!
//! ```text
//! AlphabetTable   (per-character codes + canonical symbol lists)
//!     ↑ resolves characters for
//! KeySchedule     (fixed shift / linear / quadratic / keyword keys)
//!     ↑ feeds per-position keys into
//! text + file engines  (modular substitution over chars and raw bytes)
//!     ↑ wired together by
//! Session         (settings, pass-through set, AttackDetector gating)
//! ```
//!
//! ## Examples
//!
//! Encode and decode text with a fixed Caesar shift:
//!
//! ```
//! use tabula::cipher::text::{transform, TextOptions};
//! use tabula::{Action, AlphabetTable, KeySpec};
//!
//! let mut table = AlphabetTable::new();
//! table
//!     .add_alphabet("latin", "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZz")
//!     .unwrap();
//!
//! let key = KeySpec::FixedShift { key: 3 };
//! let options = TextOptions::default();
//!
//! let encoded = transform(&table, "Hello", &key, Action::Encode, &options).unwrap();
//! assert_eq!(encoded, "Khoor");
//!
//! let decoded = transform(&table, &encoded, &key, Action::Decode, &options).unwrap();
//! assert_eq!(decoded, "Hello");
//! ```
//!
//! Drive the keyword tabula recta through a [`Session`], which records every
//! request and blocks repeated decode attempts:
//!
//! ```
//! use tabula::{Action, KeySpec, Session, Settings};
//!
//! let settings: Settings = serde_json::from_str(
//!     r#"{
//!         "alphabets": { "latin": "abcdefghijklmnopqrstuvwxyz" },
//!         "valid_chars": " ",
//!         "tries": 3,
//!         "drop_tries": 60
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut session = Session::from_settings(&settings).unwrap();
//! let key = KeySpec::Keyword { word: "ba".into() };
//!
//! let encoded = session
//!     .transform_text("ab", &key, Action::Encode, false, 0)
//!     .unwrap();
//! assert_eq!(encoded, "bb");
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`]: case-partitioned alphabet tables and character codes
//! - [`cipher`]: the modular core, key schedules, text and byte engines
//! - [`detector`]: windowed decode-attempt counting with terminal lockout
//! - [`config`]: the JSON settings document
//! - [`session`]: the long-lived context wiring it all together

pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod detector;
pub mod session;

pub use alphabet::{case_of, Alphabet, AlphabetError, AlphabetTable, CharCase, CharEntry};
pub use cipher::{Action, CipherError, KeySchedule, KeySpec};
pub use config::{ConfigError, Settings, SETTINGS_PATH_VAR};
pub use detector::{AttackDetector, RateLimited, RequestRecord};
pub use session::{Session, SessionError};
