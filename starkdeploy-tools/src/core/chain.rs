// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The boundary between lifecycle orchestration and a Starknet node.

use std::{fmt, time::Duration};

use crate::core::{
    artifact::DeclarationAttempt, deployment::DeployRequest, encoding::FieldElement,
};

/// Default interval between receipt polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default upper bound on a single confirmation wait.
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(300);

/// Operations the declare and deploy stages need from a node.
///
/// Implementations report failures as [`ChainError`], tagging the conditions the orchestrators
/// recover from with a structured [`ChainErrorKind`] whenever the node exposes one.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    async fn submit_declare(
        &self,
        attempt: &DeclarationAttempt,
    ) -> Result<DeclareSubmission, ChainError>;

    async fn submit_deploy(&self, request: &DeployRequest) -> Result<DeploySubmission, ChainError>;

    /// Polls until `transaction_hash` has a receipt.
    async fn wait_for_confirmation(
        &self,
        transaction_hash: FieldElement,
        poll_interval: Duration,
    ) -> Result<TransactionReceipt, ChainError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclareSubmission {
    pub transaction_hash: FieldElement,
    pub class_hash: FieldElement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeploySubmission {
    pub transaction_hash: FieldElement,
    pub contract_address: FieldElement,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_hash: FieldElement,
    pub status: ExecutionStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutionStatus {
    Succeeded,
    Reverted(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainErrorKind {
    ClassAlreadyDeclared,
    CompiledClassHashMismatch,
    Other,
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct ChainError {
    pub kind: ChainErrorKind,
    pub message: String,
}

impl ChainError {
    pub fn new(kind: ChainErrorKind, message: impl fmt::Display) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }

    pub fn other(message: impl fmt::Display) -> Self {
        Self::new(ChainErrorKind::Other, message)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ConfirmationConfig {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_CONFIRMATION_TIMEOUT,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfirmationError {
    #[error("transaction {transaction_hash} not confirmed within {timeout:?}")]
    TimedOut {
        transaction_hash: FieldElement,
        timeout: Duration,
    },
    #[error("transaction {transaction_hash} reverted: {reason}")]
    Reverted {
        transaction_hash: FieldElement,
        reason: String,
    },
    #[error("failed waiting for transaction: {0}")]
    Client(#[from] ChainError),
}

/// Waits for a successful receipt, bounded by `config.timeout`.
pub async fn await_confirmation(
    client: &impl ChainClient,
    transaction_hash: FieldElement,
    config: &ConfirmationConfig,
) -> Result<TransactionReceipt, ConfirmationError> {
    debug!(@grey, "waiting for transaction {}", transaction_hash.lavender());
    let wait = client.wait_for_confirmation(transaction_hash, config.poll_interval);
    let receipt = tokio::time::timeout(config.timeout, wait)
        .await
        .map_err(|_| ConfirmationError::TimedOut {
            transaction_hash,
            timeout: config.timeout,
        })??;
    match receipt.status {
        ExecutionStatus::Succeeded => Ok(receipt),
        ExecutionStatus::Reverted(reason) => Err(ConfirmationError::Reverted {
            transaction_hash,
            reason,
        }),
    }
}
