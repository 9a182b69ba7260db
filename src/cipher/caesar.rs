//! Modular substitution steps shared by every cipher mode.
//!
//! Both steps operate on alphabet codes, not characters: the caller resolves
//! a character to its code, shifts it here, and maps the result back through
//! the alphabet's symbol list. `decode_step` is the exact inverse of
//! `encode_step` for any non-negative key and positive length.

/// Shifts `code` forward by `key` positions, wrapping at `length`.
///
/// Mapped characters pass a code in `[0, length)`; the file cipher's index
/// pre-offset may pass values outside that range, which wrap through the
/// euclidean remainder the same way.
pub fn encode_step(code: i64, length: i64, key: i64) -> i64 {
    assert!(length > 0, "alphabet length must be positive");
    (code + key).rem_euclid(length)
}

/// Shifts `code` backward by `key` positions, wrapping at `length`.
pub fn decode_step(code: i64, length: i64, key: i64) -> i64 {
    assert!(length > 0, "alphabet length must be positive");
    (code + length - key.rem_euclid(length)).rem_euclid(length)
}
