//! Integration tests for tabula.
//!
//! Exercises the public surface end to end: settings loading, the three
//! text cipher modes, the byte cipher, and the decode-attempt lockout.
//!
//! Properties covered:
//! - decode(encode(text)) == text for every mode and key shape
//! - per-character case masks survive the transform
//! - pass-through and strict validation of unmapped characters
//! - key range enforcement per mode
//! - the detector's window counting and terminal block

use std::io::Write;

use tabula::cipher::text::{transform, TextOptions};
use tabula::cipher::{file, KeySpec};
use tabula::{Action, AlphabetTable, AttackDetector, CipherError, RateLimited, Session, Settings};

const LATIN: &str = "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZz";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

fn latin_table() -> AlphabetTable {
    let mut table = AlphabetTable::new();
    table.add_alphabet("latin", LATIN).unwrap();
    table
}

fn settings_json(tries: usize, drop_tries: u64) -> String {
    format!(
        r#"{{
            "alphabets": {{ "latin": "{LATIN}" }},
            "valid_chars": " .,!?",
            "tries": {tries},
            "drop_tries": {drop_tries}
        }}"#
    )
}

/// Round-trips every text cipher mode over the same input.
#[test]
fn test_roundtrip_all_text_modes() {
    let table = latin_table();
    let options = TextOptions {
        strict: false,
        pass_through: String::new(),
    };
    let input = "The Quick Brown Fox jumps over the lazy dog";

    let keys = [
        KeySpec::FixedShift { key: 9 },
        KeySpec::LinearVector { a: 3, b: 5 },
        KeySpec::QuadraticVector { a: 2, b: 3, c: 7 },
        KeySpec::Keyword {
            word: "Secret".into(),
        },
    ];

    for key in keys {
        let encoded = transform(&table, input, &key, Action::Encode, &options).unwrap();
        assert_ne!(encoded, input, "mode {key} left the text unchanged");
        let decoded = transform(&table, &encoded, &key, Action::Decode, &options).unwrap();
        assert_eq!(decoded, input, "mode {key} failed to round-trip");
    }
}

/// Round-trips the byte cipher with and without index chaining.
#[test]
fn test_roundtrip_file_cipher() {
    let data: Vec<u8> = (0..=255).cycle().take(700).collect();

    for use_index in [false, true] {
        let encoded = file::transform(&data, 113, Action::Encode, use_index).unwrap();
        let decoded = file::transform(&encoded, 113, Action::Decode, use_index).unwrap();
        assert_eq!(decoded, data);
    }
}

/// The per-character case mask of the input survives every mode.
#[test]
fn test_case_mask_is_preserved() {
    let table = latin_table();
    let options = TextOptions::default();
    let input = "AbC";

    let keys = [
        KeySpec::FixedShift { key: 5 },
        KeySpec::LinearVector { a: 1, b: 1 },
        KeySpec::Keyword { word: "key".into() },
    ];

    for key in keys {
        let encoded = transform(&table, input, &key, Action::Encode, &options).unwrap();
        let mask: Vec<bool> = input.chars().map(|c| c.is_uppercase()).collect();
        let out_mask: Vec<bool> = encoded.chars().map(|c| c.is_uppercase()).collect();
        assert_eq!(out_mask, mask, "mode {key} changed the case mask");
    }
}

/// Unmapped characters in the allow-list pass through; outside it, strict
/// validation rejects the whole operation.
#[test]
fn test_pass_through_and_strict_validation() {
    let table = latin_table();

    let lenient = TextOptions {
        strict: false,
        pass_through: String::new(),
    };
    let key = KeySpec::FixedShift { key: 3 };
    let out = transform(&table, "ab 12!", &key, Action::Encode, &lenient).unwrap();
    assert_eq!(out, "de 12!");

    let strict = TextOptions {
        strict: true,
        pass_through: " ".into(),
    };
    let out = transform(&table, "ab ab", &key, Action::Encode, &strict).unwrap();
    assert_eq!(out, "de de");

    let result = transform(&table, "ab!", &key, Action::Encode, &strict);
    assert_eq!(result, Err(CipherError::InvalidCharacter('!')));
}

/// Fixed Caesar keys must stay below every alphabet's length.
#[test]
fn test_caesar_key_bound() {
    let table = latin_table();
    let options = TextOptions::default();

    let at_length = KeySpec::FixedShift { key: 26 };
    assert!(matches!(
        transform(&table, "abc", &at_length, Action::Encode, &options),
        Err(CipherError::InvalidKey(_))
    ));

    let below = KeySpec::FixedShift { key: 25 };
    assert!(transform(&table, "abc", &below, Action::Encode, &options).is_ok());
}

/// Encoding "ab" with keyword "ba" shifts 'a' by code('b')=1 and 'b' by
/// code('a')=0, yielding "bb".
#[test]
fn test_keyword_fidelity() {
    let mut table = AlphabetTable::new();
    table.add_alphabet("latin", LOWER).unwrap();

    let key = KeySpec::Keyword { word: "ba".into() };
    let out = transform(&table, "ab", &key, Action::Encode, &TextOptions::default()).unwrap();
    assert_eq!(out, "bb");
}

/// With tries=2 and a 60 second window, the third decode check for the same
/// text fails, and the block then refuses every text.
#[test]
fn test_detector_lockout_is_global_and_terminal() {
    let mut detector = AttackDetector::new(2, 60);

    for t in [1000, 1010] {
        detector.check("x", Action::Decode, t).unwrap();
        detector.insert("x", "shift:3", Action::Decode, t).unwrap();
    }

    assert_eq!(detector.check("x", Action::Decode, 1020), Err(RateLimited));
    assert!(detector.is_blocked());

    // The block is global, not per-text, and insert is refused too.
    assert_eq!(detector.check("y", Action::Decode, 1021), Err(RateLimited));
    assert_eq!(
        detector.insert("y", "shift:4", Action::Decode, 1021),
        Err(RateLimited)
    );
}

/// Attempts older than the window do not count toward the ceiling.
#[test]
fn test_detector_window_expiry() {
    let mut detector = AttackDetector::new(2, 60);

    detector.check("x", Action::Decode, 1000).unwrap();
    detector.insert("x", "shift:3", Action::Decode, 1000).unwrap();
    detector.check("x", Action::Decode, 1001).unwrap();
    detector.insert("x", "shift:3", Action::Decode, 1001).unwrap();

    // Both records have left the window 61+ seconds later.
    assert!(detector.check("x", Action::Decode, 1062).is_ok());
}

/// File cipher output always stays inside the byte range, including where
/// the decode pre-offset would go negative before the modulus, and where
/// positions past 255 wrap the pre-offset itself.
#[test]
fn test_file_cipher_byte_range_at_boundaries() {
    // Zero bytes make every decode pre-offset past position 0 negative, and
    // the 300-byte length pushes positions beyond the modulus.
    let data = vec![0u8; 300];

    for key in [1, 200, 255] {
        let encoded = file::transform(&data, key, Action::Encode, true).unwrap();
        assert_ne!(encoded, data);
        let decoded = file::transform(&encoded, key, Action::Decode, true).unwrap();
        assert_eq!(decoded, data);
    }
}

/// A settings file on disk drives a full session: build, encode, decode,
/// then lock out the repeated decode.
#[test]
fn test_session_from_settings_file() {
    let mut settings_file = tempfile::NamedTempFile::new().unwrap();
    settings_file
        .write_all(settings_json(2, 60).as_bytes())
        .unwrap();

    let settings = Settings::from_path(settings_file.path()).unwrap();
    let mut session = Session::from_settings(&settings).unwrap();

    let key = KeySpec::LinearVector { a: 2, b: 3 };
    let encoded = session
        .transform_text("Attack at dawn!", &key, Action::Encode, false, 500)
        .unwrap();

    let decoded = session
        .transform_text(&encoded, &key, Action::Decode, false, 501)
        .unwrap();
    assert_eq!(decoded, "Attack at dawn!");

    // Decoding the same ciphertext twice more inside the window trips the
    // terminal block on the second repeat.
    session
        .transform_text(&encoded, &key, Action::Decode, false, 502)
        .unwrap();
    let result = session.transform_text(&encoded, &key, Action::Decode, false, 503);
    assert!(matches!(result, Err(tabula::SessionError::RateLimited(_))));
}

/// Encode requests are recorded but never rate-checked: the same text can be
/// encoded past the ceiling as long as the block has not tripped.
#[test]
fn test_encode_is_not_rate_checked() {
    let settings: Settings = serde_json::from_str(&settings_json(1, 60)).unwrap();
    let mut session = Session::from_settings(&settings).unwrap();

    let key = KeySpec::FixedShift { key: 3 };
    for t in 0..5 {
        session
            .transform_text("same text", &key, Action::Encode, false, t)
            .unwrap();
    }
    assert_eq!(session.detector().history().len(), 5);
}

/// Multiple configured alphabets cipher side by side in one text, and the
/// Caesar bound applies to the smallest of them.
#[test]
fn test_multiple_alphabets() {
    let mut table = AlphabetTable::new();
    table.add_alphabet("latin", LOWER).unwrap();
    table.add_alphabet("vowels_upper", "AEIOU").unwrap();

    let options = TextOptions::default();
    let key = KeySpec::FixedShift { key: 4 };

    // 'a' shifts within latin (26), 'E' within the vowel alphabet (5).
    let out = transform(&table, "aE", &key, Action::Encode, &options).unwrap();
    assert_eq!(out, "eA");

    // Key 5 no longer fits the 5-symbol alphabet even though latin allows it.
    let too_big = KeySpec::FixedShift { key: 5 };
    assert!(matches!(
        transform(&table, "aE", &too_big, Action::Encode, &options),
        Err(CipherError::InvalidKey(_))
    ));
}
