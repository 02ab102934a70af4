// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The Starknet scalar, `felt252`.

use std::{fmt, str::FromStr};

use alloy_primitives::{uint, B256, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use starknet::core::types::Felt;

use super::EncodingError;

/// Field modulus: `2^251 + 17 * 2^192 + 1`.
pub const FIELD_PRIME: U256 =
    uint!(0x0800000000000011000000000000000000000000000000000000000000000001_U256);

/// An element of the Starknet scalar field.
///
/// Always strictly less than [`FIELD_PRIME`]; every constructor rejects values outside the field
/// instead of reducing them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement(U256);

impl FieldElement {
    pub const ZERO: Self = Self(U256::ZERO);

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn from_u64(value: u64) -> Self {
        Self(U256::from_limbs([value, 0, 0, 0]))
    }

    pub fn from_u128(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// A uniformly random 248-bit element, used for deployment salts.
    pub fn random() -> Self {
        Self(U256::from_be_slice(&B256::random()[1..]))
    }

    /// Parses a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, EncodingError> {
        let invalid = || EncodingError::InvalidHex(s.to_string());
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Self::ZERO);
        }
        if digits.len() > 64 {
            return Err(invalid());
        }
        let value = U256::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Self::checked(value).ok_or_else(invalid)
    }

    /// Parses a non-negative base-10 integer.
    pub fn from_decimal_string(s: &str) -> Result<Self, EncodingError> {
        let value = parse_decimal(s)?;
        Self::checked(value).ok_or_else(|| EncodingError::Overflow(s.trim().to_string()))
    }

    /// Interprets `bytes` as a big-endian integer.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, EncodingError> {
        let overflow = || EncodingError::Overflow(format!("0x{}", hex::encode(bytes)));
        let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        let value = U256::try_from_be_slice(&bytes[first..]).ok_or_else(overflow)?;
        Self::checked(value).ok_or_else(overflow)
    }

    pub fn to_bytes_be(&self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }

    /// Returns the value as a `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        let limbs = self.0.as_limbs();
        limbs[1..].iter().all(|l| *l == 0).then_some(limbs[0])
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn checked(value: U256) -> Option<Self> {
        (value < FIELD_PRIME).then_some(Self(value))
    }
}

/// Parses a non-negative decimal integer that fits in 256 bits.
pub(crate) fn parse_decimal(s: &str) -> Result<U256, EncodingError> {
    let digits = s.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EncodingError::InvalidDecimal(s.to_string()));
    }
    U256::from_str_radix(digits, 10).map_err(|_| EncodingError::Overflow(digits.to_string()))
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for FieldElement {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Felt> for FieldElement {
    fn from(felt: Felt) -> Self {
        // Felt is reduced by construction.
        Self(U256::from_be_bytes(felt.to_bytes_be()))
    }
}

impl From<FieldElement> for Felt {
    fn from(element: FieldElement) -> Self {
        Felt::from_bytes_be(&element.to_bytes_be())
    }
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex() {
        assert_eq!(FieldElement::from_hex("0x0").unwrap(), FieldElement::ZERO);
        assert_eq!(FieldElement::from_hex("0x").ok(), None);
        assert_eq!(
            FieldElement::from_hex("0X2a").unwrap(),
            FieldElement::from_u64(42)
        );
        assert_eq!(
            FieldElement::from_hex("000000ff").unwrap(),
            FieldElement::from_u64(255)
        );
        assert!(matches!(
            FieldElement::from_hex("0xzz"),
            Err(EncodingError::InvalidHex(_))
        ));
    }

    #[test]
    fn hex_at_field_boundary() {
        let max = "0x800000000000011000000000000000000000000000000000000000000000000";
        let felt = FieldElement::from_hex(max).unwrap();
        assert_eq!(felt.to_string(), max);

        let prime = "0x800000000000011000000000000000000000000000000000000000000000001";
        assert!(matches!(
            FieldElement::from_hex(prime),
            Err(EncodingError::InvalidHex(_))
        ));
        let too_long = format!("0x1{}", "0".repeat(64));
        assert!(FieldElement::from_hex(&too_long).is_err());
    }

    #[test]
    fn parse_decimal_strings() {
        assert_eq!(
            FieldElement::from_decimal_string("1000000").unwrap(),
            FieldElement::from_u64(1_000_000)
        );
        assert!(matches!(
            FieldElement::from_decimal_string("-5"),
            Err(EncodingError::InvalidDecimal(_))
        ));
        assert!(matches!(
            FieldElement::from_decimal_string("12a"),
            Err(EncodingError::InvalidDecimal(_))
        ));
        let prime = FIELD_PRIME.to_string();
        assert!(matches!(
            FieldElement::from_decimal_string(&prime),
            Err(EncodingError::Overflow(_))
        ));
    }

    #[test]
    fn bytes_big_endian() {
        let felt = FieldElement::from_bytes_be(b"hello").unwrap();
        assert_eq!(felt, FieldElement::from_hex("0x68656c6c6f").unwrap());
        assert_eq!(FieldElement::from_bytes_be(&[]).unwrap(), FieldElement::ZERO);

        let mut padded = [0u8; 40];
        padded[39] = 7;
        assert_eq!(
            FieldElement::from_bytes_be(&padded).unwrap(),
            FieldElement::from_u64(7)
        );
        assert!(matches!(
            FieldElement::from_bytes_be(&[0xff; 32]),
            Err(EncodingError::Overflow(_))
        ));
    }

    #[test]
    fn random_stays_below_248_bits() {
        let felt = FieldElement::random();
        assert!(felt.as_u256().bit_len() <= 248);
        assert_ne!(felt, FieldElement::random());
    }

    #[test]
    fn starknet_felt_conversion() {
        let felt = FieldElement::from_hex(
            "0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
        )
        .unwrap();
        let converted: Felt = felt.into();
        assert_eq!(FieldElement::from(converted), felt);
    }
}
