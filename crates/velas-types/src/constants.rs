//! Velas address constants and type definitions.

use serde::{Deserialize, Serialize};

// =============================================================================
// Address Kinds
// =============================================================================

/// Textual representation of an account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    /// Hex form (0x...)
    Eth,
    /// Base58Check form (V...)
    Vlx,
}

impl AddressKind {
    /// Literal prefix that introduces this representation.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Eth => ETH_PREFIX,
            Self::Vlx => VLX_PREFIX,
        }
    }

    /// The representation a conversion produces.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Eth => Self::Vlx,
            Self::Vlx => Self::Eth,
        }
    }
}

impl std::fmt::Display for AddressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eth => write!(f, "ETH"),
            Self::Vlx => write!(f, "VLX"),
        }
    }
}

// =============================================================================
// Prefixes
// =============================================================================

pub const ETH_PREFIX: &str = "0x";
pub const VLX_PREFIX: &str = "V";

// =============================================================================
// Base58
// =============================================================================

/// Bitcoin Base58 alphabet. Index 0 ('1') is the zero digit.
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub const BASE58_ZERO: char = '1';

// =============================================================================
// Sizes
// =============================================================================

/// Raw account identifier size in bytes.
pub const RAW_ADDRESS_SIZE: usize = 20;

/// Checksum size in bytes.
pub const CHECKSUM_SIZE: usize = 4;

/// Encoded payload size (address + checksum).
pub const PAYLOAD_SIZE: usize = RAW_ADDRESS_SIZE + CHECKSUM_SIZE;

/// Hex characters in an ETH address body.
pub const ETH_HEX_LEN: usize = RAW_ADDRESS_SIZE * 2;

/// Hex characters in a checksum.
pub const CHECKSUM_HEX_LEN: usize = CHECKSUM_SIZE * 2;

/// Full ETH address length including `0x`.
pub const ETH_ADDRESS_LEN: usize = ETH_PREFIX.len() + ETH_HEX_LEN;

/// Base58 characters in a VLX address body (fixed width, '1'-padded).
pub const VLX_BODY_LEN: usize = 33;

/// Full VLX address length including `V`.
pub const VLX_ADDRESS_LEN: usize = VLX_PREFIX.len() + VLX_BODY_LEN;
