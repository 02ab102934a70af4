// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Offline constructor calldata encoding.

use eyre::Result;

use crate::core::{
    artifact::ArtifactError,
    calldata::CalldataBuilder,
    encoding::FieldElement,
    network::Network,
    project::Project,
};

/// Encodes the constructor calldata of a contract for `network`.
///
/// The constructor layout is checked against the Sierra ABI when the Sierra artifact exists, with
/// or without its CASM compilation. A built-in layout is used unchecked when it does not.
pub fn calldata(
    project: &Project,
    contract: Option<&str>,
    network: Network,
) -> Result<Vec<FieldElement>> {
    let contract = project.contract(contract)?;
    let spec = match contract.constructor_abi() {
        Ok(abi) => {
            let spec = contract.spec(&abi)?;
            spec.ensure_matches_abi(&abi)?;
            spec
        }
        Err(ArtifactError::NotFound(path)) => match contract.registry_spec()? {
            Some(spec) => {
                warn!(@yellow, "{} not found, skipping ABI check", path.display());
                spec
            }
            None => return Err(ArtifactError::NotFound(path).into()),
        },
        Err(err) => return Err(err.into()),
    };
    if let Some(expected) = &contract.toml().interface_hash {
        spec.ensure_interface(expected)?;
    }

    let calldata = CalldataBuilder::new(&spec).build(&contract.args(network))?;
    debug!(@grey, "{} calldata for {network}: {} felts", spec.contract(), calldata.len());
    Ok(calldata)
}
