//! VLX address checksum.
//!
//! The checksum is taken over the lowercase hex *text* of the payload, not
//! the raw bytes: `sha256_hex(sha256_hex(hex_text))[..8]`, where each round
//! hashes the ASCII of the previous round's lowercase hex digest.

use crate::constants::CHECKSUM_SIZE;
use sha2::{Digest, Sha256};

/// Second-round digest: SHA-256 over the hex text of SHA-256(`text`).
fn double_sha256_text(text: &str) -> [u8; 32] {
    let first = hex::encode(Sha256::digest(text.as_bytes()));
    Sha256::digest(first.as_bytes()).into()
}

/// Checksum of a lowercase hex payload, as raw bytes.
///
/// The caller is responsible for lowercasing; `"AB"` and `"ab"` produce
/// different checksums.
pub fn checksum_bytes(payload_hex: &str) -> [u8; CHECKSUM_SIZE] {
    let digest = double_sha256_text(payload_hex);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    out
}

/// Checksum of a lowercase hex payload, as 8 lowercase hex characters.
pub fn checksum_hex(payload_hex: &str) -> String {
    hex::encode(checksum_bytes(payload_hex))
}

/// Compare an embedded checksum against the one recomputed from the payload.
pub fn verify(payload_hex: &str, embedded_hex: &str) -> bool {
    checksum_hex(payload_hex) == embedded_hex
}
