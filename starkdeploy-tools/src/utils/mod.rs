// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use std::{fs, path::Path};

use crate::{core::encoding::FieldElement, Result};

pub mod color;

#[cfg(test)]
pub(crate) mod testing;

/// Reads a hex-encoded felt, such as a private key, from a file.
pub fn read_felt_file(path: impl AsRef<Path>) -> Result<FieldElement> {
    let text = fs::read_to_string(path)?;
    Ok(FieldElement::from_hex(text.trim())?)
}

/// Formats felts as a JSON array of hex strings.
pub fn felts_to_json(felts: &[FieldElement]) -> Result<String> {
    Ok(serde_json::to_string_pretty(felts)?)
}
