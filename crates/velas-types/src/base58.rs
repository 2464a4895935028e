//! Fixed-width Base58 encoding/decoding.
//!
//! Plain Bitcoin-alphabet Base58 over a big-endian unsigned integer, with one
//! '1' per leading zero byte. On top of that, addresses use a fixed width:
//! encoded strings are left-padded with '1' up to a target length, and
//! decoded byte strings are trimmed from the front down to a target length.
//!
//! The padding and trimming are inverses only for the zero bytes the padding
//! introduces; callers pick target lengths that match their payload size.

use crate::constants::BASE58_ZERO;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Base58Error {
    #[error("attempt to decode an empty string")]
    EmptyInput,

    #[error("invalid character '{0}' at position {1}")]
    InvalidCharacter(char, usize),

    #[error("base58 decode error: {0}")]
    Decode(String),
}

fn map_decode_error(err: bs58::decode::Error, encoded: &str) -> Base58Error {
    match err {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            Base58Error::InvalidCharacter(character, index)
        }
        bs58::decode::Error::NonAsciiCharacter { index } => {
            let ch = encoded[index..]
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            Base58Error::InvalidCharacter(ch, index)
        }
        other => Base58Error::Decode(other.to_string()),
    }
}

/// Encode bytes to Base58 without padding.
///
/// A zero-valued integer still produces one '1' digit, so an all-zero input
/// of `n` bytes encodes to `n + 1` '1' characters.
pub fn encode(data: &[u8]) -> String {
    let mut encoded = bs58::encode(data).into_string();
    if data.iter().all(|&b| b == 0) {
        encoded.insert(0, BASE58_ZERO);
    }
    encoded
}

/// Encode bytes to Base58, left-padded with '1' to `target_len` characters.
///
/// Results already at or beyond `target_len` are returned unchanged.
pub fn encode_padded(data: &[u8], target_len: usize) -> String {
    let encoded = encode(data);
    if encoded.len() >= target_len {
        return encoded;
    }

    let mut result = String::with_capacity(target_len);
    for _ in encoded.len()..target_len {
        result.push(BASE58_ZERO);
    }
    result.push_str(&encoded);
    result
}

/// Decode a Base58 string to bytes, one zero byte per leading '1'.
///
/// Mirrors [`encode`] at the zero value: a string made only of `n` '1'
/// characters decodes to `n + 1` zero bytes. Character errors report the
/// byte offset of the offending character.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
    if encoded.is_empty() {
        return Err(Base58Error::EmptyInput);
    }

    let mut decoded = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| map_decode_error(e, encoded))?;

    if encoded.chars().all(|c| c == BASE58_ZERO) {
        decoded.push(0);
    }
    Ok(decoded)
}

/// Decode a Base58 string, then drop leading bytes until at most
/// `target_len` remain.
///
/// Shorter results are returned as-is; callers validate the final length.
pub fn decode_truncated(encoded: &str, target_len: usize) -> Result<Vec<u8>, Base58Error> {
    let mut decoded = decode(encoded)?;
    if decoded.len() > target_len {
        let excess = decoded.len() - target_len;
        decoded.drain(..excess);
    }
    Ok(decoded)
}
