//! Byte cipher over the full `u8` value space.
//!
//! Files are treated as an alphabet of 256 symbols: every byte is its own
//! code, shifted by a fixed key. An optional index-chaining layer mixes each
//! byte's position into the value before the modular step, so identical
//! bytes at different offsets cipher differently.

use super::{Action, CipherError};

/// Modulus for byte ciphering: the full `u8` value space.
pub const BYTE_ALPHABET_LEN: i64 = 256;

/// Ciphers `bytes` with a fixed `key` in the direction of `action`.
///
/// The key must lie in `[1, 256)`. With `use_index`, each byte's position is
/// added (encode) or subtracted (decode) on the unbounded value before the
/// modular step, so negative intermediates wrap through the euclidean
/// remainder instead of saturating.
pub fn transform(
    bytes: &[u8],
    key: i64,
    action: Action,
    use_index: bool,
) -> Result<Vec<u8>, CipherError> {
    if key < 1 {
        return Err(CipherError::InvalidKey(
            "key must be greater than 0".into(),
        ));
    }
    if key >= BYTE_ALPHABET_LEN {
        return Err(CipherError::InvalidKey(
            "key must be smaller than the byte alphabet's length".into(),
        ));
    }

    let mut result = Vec::with_capacity(bytes.len());
    for (i, &b) in bytes.iter().enumerate() {
        let mut value = i64::from(b);
        if use_index {
            match action {
                Action::Encode => value += i as i64,
                Action::Decode => value -= i as i64,
            }
        }
        result.push(action.step(value, BYTE_ALPHABET_LEN, key) as u8);
    }
    Ok(result)
}
