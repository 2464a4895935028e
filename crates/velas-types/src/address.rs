//! Velas address conversion between the ETH (hex) and VLX (Base58Check) forms.
//!
//! Both forms carry the same 20-byte account identifier. The VLX form appends
//! a 4-byte checksum (see [`crate::checksum`]) and Base58-encodes the 24-byte
//! result at a fixed width of 33 characters.

use crate::base58::{self, Base58Error};
use crate::checksum;
use crate::constants::{
    AddressKind, CHECKSUM_HEX_LEN, ETH_ADDRESS_LEN, ETH_HEX_LEN, ETH_PREFIX, PAYLOAD_SIZE,
    RAW_ADDRESS_SIZE, VLX_BODY_LEN, VLX_PREFIX,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must be a non-empty string")]
    EmptyInput,

    #[error("invalid address prefix")]
    InvalidPrefix,

    #[error("invalid character '{0}' at position {1}")]
    InvalidCharacter(char, usize),

    #[error("invalid address format: {0}")]
    InvalidFormat(String),

    #[error("invalid checksum: expected {expected}, got {actual}")]
    InvalidChecksum { expected: String, actual: String },
}

impl From<Base58Error> for AddressError {
    fn from(err: Base58Error) -> Self {
        match err {
            Base58Error::EmptyInput => AddressError::EmptyInput,
            Base58Error::InvalidCharacter(ch, pos) => AddressError::InvalidCharacter(ch, pos),
            other => AddressError::InvalidFormat(other.to_string()),
        }
    }
}

/// A 20-byte account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawAddress([u8; RAW_ADDRESS_SIZE]);

impl RawAddress {
    pub fn new(bytes: [u8; RAW_ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; RAW_ADDRESS_SIZE] {
        &self.0
    }

    /// Parse an ETH-style address (`0x` + 40 hex digits, any case).
    pub fn from_eth(address: &str) -> Result<Self, AddressError> {
        if address.is_empty() {
            return Err(AddressError::EmptyInput);
        }
        let body = address
            .strip_prefix(ETH_PREFIX)
            .ok_or(AddressError::InvalidPrefix)?;

        if !body.is_ascii() {
            return Err(AddressError::InvalidFormat(
                "address contains non-ASCII characters".to_string(),
            ));
        }
        if body.len() != ETH_HEX_LEN {
            return Err(AddressError::InvalidFormat(format!(
                "expected {} hex digits, got {}",
                ETH_HEX_LEN,
                body.len()
            )));
        }

        let mut bytes = [0u8; RAW_ADDRESS_SIZE];
        hex::decode_to_slice(body, &mut bytes)
            .map_err(|e| AddressError::InvalidFormat(format!("invalid hex: {}", e)))?;
        Ok(Self(bytes))
    }

    /// Parse a VLX-style address, verifying its checksum.
    pub fn from_vlx(address: &str) -> Result<Self, AddressError> {
        Self::from_eth(&vlx_to_eth(address)?)
    }

    /// Lowercase ETH-style form.
    pub fn to_eth(&self) -> String {
        format!("{}{}", ETH_PREFIX, hex::encode(self.0))
    }

    /// VLX-style form: `V` + 33 Base58 characters.
    pub fn to_vlx(&self) -> String {
        let payload_hex = hex::encode(self.0);
        let sum = checksum::checksum_bytes(&payload_hex);

        let mut payload = [0u8; PAYLOAD_SIZE];
        payload[..RAW_ADDRESS_SIZE].copy_from_slice(&self.0);
        payload[RAW_ADDRESS_SIZE..].copy_from_slice(&sum);

        format!("{}{}", VLX_PREFIX, base58::encode_padded(&payload, VLX_BODY_LEN))
    }
}

impl fmt::Display for RawAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_eth())
    }
}

impl FromStr for RawAddress {
    type Err = AddressError;

    /// Accepts either representation.
    fn from_str(s: &str) -> Result<Self, AddressError> {
        match detect_kind(s)? {
            AddressKind::Eth => Self::from_eth(s),
            AddressKind::Vlx => Self::from_vlx(s),
        }
    }
}

impl From<[u8; RAW_ADDRESS_SIZE]> for RawAddress {
    fn from(bytes: [u8; RAW_ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }
}

/// Convert an ETH-style address to its VLX-style form.
pub fn eth_to_vlx(address: &str) -> Result<String, AddressError> {
    let raw = RawAddress::from_eth(address)?;
    let vlx = raw.to_vlx();
    log::debug!("eth_to_vlx: {} -> {}", address, vlx);
    Ok(vlx)
}

/// Convert a VLX-style address to its lowercase ETH-style form.
pub fn vlx_to_eth(address: &str) -> Result<String, AddressError> {
    if address.is_empty() {
        return Err(AddressError::EmptyInput);
    }
    let body = address
        .strip_prefix(VLX_PREFIX)
        .ok_or(AddressError::InvalidPrefix)?;

    let decoded = base58::decode_truncated(body, PAYLOAD_SIZE)?;
    let decoded_hex = hex::encode(&decoded);

    // Checksum is the last 8 hex digits; the payload must be non-empty.
    if decoded_hex.len() <= CHECKSUM_HEX_LEN {
        return Err(AddressError::InvalidFormat(format!(
            "decoded payload too short ({} hex digits)",
            decoded_hex.len()
        )));
    }
    let (payload_hex, embedded) = decoded_hex.split_at(decoded_hex.len() - CHECKSUM_HEX_LEN);

    let expected = checksum::checksum_hex(payload_hex);
    if expected != embedded {
        log::debug!("vlx_to_eth: checksum mismatch for {}", address);
        return Err(AddressError::InvalidChecksum {
            expected,
            actual: embedded.to_string(),
        });
    }

    let eth = format!("{}{}", ETH_PREFIX, payload_hex);
    if eth.len() != ETH_ADDRESS_LEN {
        return Err(AddressError::InvalidFormat(format!(
            "expected {} characters, got {}",
            ETH_ADDRESS_LEN,
            eth.len()
        )));
    }

    log::debug!("vlx_to_eth: {} -> {}", address, eth);
    Ok(eth)
}

/// Identify the representation of an address from its prefix.
pub fn detect_kind(address: &str) -> Result<AddressKind, AddressError> {
    if address.is_empty() {
        return Err(AddressError::EmptyInput);
    }
    if address.starts_with(ETH_PREFIX) {
        Ok(AddressKind::Eth)
    } else if address.starts_with(VLX_PREFIX) {
        Ok(AddressKind::Vlx)
    } else {
        Err(AddressError::InvalidPrefix)
    }
}

/// Convert an address to the other representation.
pub fn convert(address: &str) -> Result<String, AddressError> {
    match detect_kind(address)? {
        AddressKind::Eth => eth_to_vlx(address),
        AddressKind::Vlx => vlx_to_eth(address),
    }
}

pub fn is_valid_eth_address(address: &str) -> bool {
    RawAddress::from_eth(address).is_ok()
}

pub fn is_valid_vlx_address(address: &str) -> bool {
    vlx_to_eth(address).is_ok()
}

/// Describe an address in human-readable form.
pub fn describe_address(address: &str) -> String {
    let described = detect_kind(address)
        .and_then(|kind| convert(address).map(|other| (kind, other)));

    match described {
        Ok((kind, other)) => format!("{} address ({}: {})", kind, kind.opposite(), other),
        Err(e) => format!("Invalid address: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETH: &str = "0x32Be343B94f860124dC4fEe278FDCBD38C102D88";
    const VLX: &str = "V5dJeCa7bmkqmZF53TqjRbnB4fG6hxuu4f";

    #[test]
    fn test_eth_to_vlx() {
        assert_eq!(eth_to_vlx(ETH).unwrap(), VLX);
    }

    #[test]
    fn test_vlx_to_eth_lowercase() {
        assert_eq!(vlx_to_eth(VLX).unwrap(), ETH.to_lowercase());
    }

    #[test]
    fn test_raw_address_roundtrip() {
        let raw = RawAddress::new([0x5A; RAW_ADDRESS_SIZE]);
        let vlx = raw.to_vlx();
        assert_eq!(vlx.len(), 34);
        assert_eq!(RawAddress::from_vlx(&vlx).unwrap(), raw);
        assert_eq!(RawAddress::from_eth(&raw.to_eth()).unwrap(), raw);
    }

    #[test]
    fn test_raw_address_from_str() {
        let from_eth: RawAddress = ETH.parse().unwrap();
        let from_vlx: RawAddress = VLX.parse().unwrap();
        assert_eq!(from_eth, from_vlx);
        assert_eq!(from_eth.to_string(), ETH.to_lowercase());
        assert_eq!(from_eth.as_bytes()[0], 0x32);
        assert_eq!("zzz".parse::<RawAddress>(), Err(AddressError::InvalidPrefix));
    }

    #[test]
    fn test_eth_errors() {
        assert_eq!(eth_to_vlx(""), Err(AddressError::EmptyInput));
        assert_eq!(eth_to_vlx("not-an-address"), Err(AddressError::InvalidPrefix));
        assert_eq!(
            eth_to_vlx("0X32be343b94f860124dc4fee278fdcbd38c102d88"),
            Err(AddressError::InvalidPrefix)
        );
        assert!(matches!(eth_to_vlx("0x1234"), Err(AddressError::InvalidFormat(_))));
        assert!(matches!(
            eth_to_vlx("0xzz00000000000000000000000000000000000000"),
            Err(AddressError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_eth_non_ascii_body() {
        assert_eq!(
            eth_to_vlx("0xé"),
            Err(AddressError::InvalidFormat(
                "address contains non-ASCII characters".to_string()
            ))
        );
        let body = format!("{}é", "0".repeat(38));
        assert_eq!(body.len(), ETH_HEX_LEN);
        assert!(matches!(
            RawAddress::from_eth(&format!("0x{}", body)),
            Err(AddressError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_vlx_errors() {
        assert_eq!(vlx_to_eth(""), Err(AddressError::EmptyInput));
        assert_eq!(vlx_to_eth("V"), Err(AddressError::EmptyInput));
        assert_eq!(vlx_to_eth(&ETH[2..]), Err(AddressError::InvalidPrefix));
        assert_eq!(
            vlx_to_eth("V5dJeCa7bmkqmZF53TqjRbnB4fG6hxuu40"),
            Err(AddressError::InvalidCharacter('0', 32))
        );
        assert!(matches!(vlx_to_eth("V2"), Err(AddressError::InvalidFormat(_))));
    }

    #[test]
    fn test_vlx_all_zero_digits() {
        // "1111" decodes to five zero bytes: a one-byte payload plus a checksum.
        assert!(matches!(
            vlx_to_eth("V1111"),
            Err(AddressError::InvalidChecksum { .. })
        ));
        // "111" decodes to four bytes, leaving no room for a payload.
        assert!(matches!(vlx_to_eth("V111"), Err(AddressError::InvalidFormat(_))));
        assert!(matches!(
            vlx_to_eth(&format!("V{}", "1".repeat(33))),
            Err(AddressError::InvalidChecksum { .. })
        ));
    }

    #[test]
    fn test_vlx_wrong_length_with_valid_checksum() {
        // 5-byte payload with a correct checksum, left unpadded.
        let payload_hex = "0102030405";
        let mut data = hex::decode(payload_hex).unwrap();
        data.extend_from_slice(&checksum::checksum_bytes(payload_hex));
        let address = format!("V{}", base58::encode(&data));

        assert!(matches!(vlx_to_eth(&address), Err(AddressError::InvalidFormat(_))));
    }

    #[test]
    fn test_detect_and_convert() {
        assert_eq!(detect_kind(ETH).unwrap(), AddressKind::Eth);
        assert_eq!(detect_kind(VLX).unwrap(), AddressKind::Vlx);
        assert_eq!(detect_kind(""), Err(AddressError::EmptyInput));
        assert_eq!(detect_kind("x0"), Err(AddressError::InvalidPrefix));
        assert_eq!(convert(ETH).unwrap(), VLX);
        assert_eq!(convert(VLX).unwrap(), ETH.to_lowercase());
    }

    #[test]
    fn test_validation() {
        assert!(is_valid_eth_address(ETH));
        assert!(!is_valid_eth_address(VLX));
        assert!(is_valid_vlx_address(VLX));
        assert!(!is_valid_vlx_address(ETH));
    }

    #[test]
    fn test_describe_address() {
        assert_eq!(
            describe_address(VLX),
            format!("VLX address (ETH: {})", ETH.to_lowercase())
        );
        assert_eq!(describe_address(ETH), format!("ETH address (VLX: {})", VLX));
        assert_eq!(describe_address(""), "Invalid address: address must be a non-empty string");
    }
}
