// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eyre::Result;

use crate::core::{encoding::FieldElement, project::Project};

/// Computes the class hash and compiled class hash of a contract's artifacts.
pub fn class_hash(
    project: &Project,
    contract: Option<&str>,
) -> Result<(FieldElement, FieldElement)> {
    let contract = project.contract(contract)?;
    let attempt = contract.load_artifacts()?;
    Ok((attempt.class_hash(), attempt.compiled_class_hash()))
}
