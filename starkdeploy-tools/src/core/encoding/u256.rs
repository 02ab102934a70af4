// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Cairo `u256` serialization: two 128-bit limbs, low first.

use alloy_primitives::U256;

use super::{felt::parse_decimal, EncodingError, FieldElement};

/// Splits `value` into its `(low, high)` 128-bit halves.
///
/// Both halves are below `2^128` and therefore always valid field elements.
pub fn split(value: U256) -> (FieldElement, FieldElement) {
    let limbs = value.as_limbs();
    let low = ((limbs[1] as u128) << 64) | limbs[0] as u128;
    let high = ((limbs[3] as u128) << 64) | limbs[2] as u128;
    (FieldElement::from_u128(low), FieldElement::from_u128(high))
}

/// Parses a decimal `u256` from configuration.
pub fn parse_u256(s: &str) -> Result<U256, EncodingError> {
    if s.trim_start().starts_with('-') {
        return Err(EncodingError::NegativeValue(s.to_string()));
    }
    parse_decimal(s)
}

pub fn split_decimal(s: &str) -> Result<(FieldElement, FieldElement), EncodingError> {
    parse_u256(s).map(split)
}
