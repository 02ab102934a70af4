// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eyre::Result;

use crate::core::project::Project;

/// Print the constructor signature and interface hash
pub fn print_constructor(project: &Project, contract: Option<&str>) -> Result<()> {
    let contract = project.contract(contract)?;
    let spec = match contract.registry_spec()? {
        Some(spec) => spec,
        None => contract.spec(&contract.constructor_abi()?)?,
    };
    mintln!("{}", spec.signature());
    greyln!("interface hash: {}", spec.interface_hash_hex());
    for (position, param) in spec.params().iter().enumerate() {
        greyln!("  {position}: {} ({})", param.name, param.kind);
    }
    Ok(())
}
