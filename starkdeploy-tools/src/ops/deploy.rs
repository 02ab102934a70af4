// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use eyre::Result;

use super::ChainConfig;
use crate::core::{
    deployment::DeploymentPlan, history::DeploymentHistory, project::Project,
    record::DeploymentRecord,
};

/// Declares and deploys a contract, appending the result to `history` if given.
pub async fn deploy(
    project: &Project,
    contract: Option<&str>,
    config: &ChainConfig,
    history: Option<&DeploymentHistory>,
) -> Result<DeploymentRecord> {
    let contract = project.contract(contract)?;
    let attempt = contract.load_artifacts()?;
    let spec = contract.spec(attempt.constructor_abi())?;
    let network = project.network(config.network, config.rpc_url.as_deref())?;
    let toml = contract.toml();

    let plan = DeploymentPlan::builder()
        .contract_name(spec.contract())
        .network(config.network)
        .spec(spec)
        .args(contract.args(config.network))
        .interface_hash(toml.interface_hash.clone())
        .salt(toml.salt)
        .unique(toml.unique)
        .settle_delay(network.declaration_delay)
        .confirmation(config.confirmation)
        .build();

    // Surface encoding errors before connecting.
    let calldata = plan.calldata(&attempt)?;
    debug!(@grey, "constructor calldata: {}", crate::utils::felts_to_json(&calldata)?);

    let client = config.connect(&network).await?;
    let record = plan.execute(&client, &attempt).await?;
    print_summary(&record);

    if let Some(history) = history {
        let path = history.append(&record)?;
        info!(@grey, "deployment recorded in {}", path.display());
    }
    Ok(record)
}

fn print_summary(record: &DeploymentRecord) {
    mintln!("deployed {} to {}", record.contract_name(), record.network());
    greyln!("class hash: {}", record.class_hash());
    greyln!("contract address: {}", record.deployed_address());
    greyln!("deployment tx hash: {}", record.transaction_hash());
}
