// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use crate::core::{
    chain::{await_confirmation, ChainClient, ChainError, ConfirmationConfig, ConfirmationError},
    encoding::FieldElement,
};

pub use lifecycle::{DeploymentPlan, LifecycleError};
pub use request::DeployRequest;

pub mod lifecycle;
pub mod request;

/// A confirmed contract instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployedContract {
    pub address: FieldElement,
    pub transaction_hash: FieldElement,
}

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("deploy submission failed: {0}")]
    SubmissionFailed(#[source] ChainError),

    /// The transaction was sent, but its outcome is unknown or failed.
    #[error("deploy tx {transaction_hash} for {contract_address} failed to confirm: {source}")]
    ConfirmationFailed {
        transaction_hash: FieldElement,
        contract_address: FieldElement,
        #[source]
        source: ConfirmationError,
    },
}

/// Submits `request` and waits for it to land.
pub async fn deploy(
    client: &impl ChainClient,
    request: &DeployRequest,
    confirmation: &ConfirmationConfig,
) -> Result<DeployedContract, DeployError> {
    debug!(@grey, "deploying class {} with salt {}", request.class_hash, request.salt);
    let submission = client
        .submit_deploy(request)
        .await
        .map_err(DeployError::SubmissionFailed)?;
    let transaction_hash = submission.transaction_hash;
    let contract_address = submission.contract_address;
    debug!(@grey, "sent deploy tx: {}", transaction_hash.lavender());

    await_confirmation(client, transaction_hash, confirmation)
        .await
        .map_err(|source| DeployError::ConfirmationFailed {
            transaction_hash,
            contract_address,
            source,
        })?;

    info!(@grey, "deployed contract at {}", contract_address.mint());
    Ok(DeployedContract {
        address: contract_address,
        transaction_hash,
    })
}
