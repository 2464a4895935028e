//! Core types and constants for Velas account addresses.
//!
//! A Velas account is a 20-byte identifier with two textual forms: the
//! ETH-style hex address (`0x` + 40 hex digits) and the VLX-style
//! Base58Check address (`V` + 33 Base58 characters). This crate converts
//! between them.

pub mod address;
pub mod base58;
pub mod checksum;
pub mod constants;

pub use address::{convert, eth_to_vlx, vlx_to_eth, AddressError, RawAddress};
pub use base58::Base58Error;
pub use constants::AddressKind;
