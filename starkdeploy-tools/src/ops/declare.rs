// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Class declaration.

use eyre::Result;

use super::ChainConfig;
use crate::core::{
    declaration::{DeclarationOrchestrator, DeclarationOutcome},
    project::Project,
};

/// Declares a contract class, treating an existing declaration as success.
pub async fn declare(
    project: &Project,
    contract: Option<&str>,
    config: &ChainConfig,
) -> Result<DeclarationOutcome> {
    let contract = project.contract(contract)?;
    let attempt = contract.load_artifacts()?;
    let network = project.network(config.network, config.rpc_url.as_deref())?;

    let client = config.connect(&network).await?;
    let mut orchestrator = DeclarationOrchestrator::new(&client, config.confirmation);
    let outcome = orchestrator.declare(&attempt).await?;
    Ok(outcome)
}
