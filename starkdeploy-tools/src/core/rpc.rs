// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! [`ChainClient`] over Starknet JSON-RPC, signing with a single-owner account.

use std::{fmt, time::Duration};

use starknet::{
    accounts::{Account, AccountError, ConnectedAccount, ExecutionEncoding, SingleOwnerAccount},
    contract::ContractFactory,
    core::types::{BlockId, BlockTag, ExecutionResult, Felt, StarknetError},
    providers::{jsonrpc::HttpTransport, JsonRpcClient, Provider, ProviderError, Url},
    signers::{LocalWallet, SigningKey},
};

use crate::core::{
    artifact::DeclarationAttempt,
    chain::{
        ChainClient, ChainError, ChainErrorKind, DeclareSubmission, DeploySubmission,
        ExecutionStatus, TransactionReceipt,
    },
    deployment::DeployRequest,
    encoding::FieldElement,
};

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("invalid rpc url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("rpc error: {0}")]
    Provider(#[from] ProviderError),
    #[error("connected to chain {actual}, expected {expected}")]
    ChainMismatch {
        expected: FieldElement,
        actual: FieldElement,
    },
}

type RpcAccount = SingleOwnerAccount<JsonRpcClient<HttpTransport>, LocalWallet>;

pub struct StarknetRpcClient {
    account: RpcAccount,
}

impl fmt::Debug for StarknetRpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarknetRpcClient")
            .field("address", &FieldElement::from(self.account.address()))
            .finish_non_exhaustive()
    }
}

impl StarknetRpcClient {
    /// Connects to `rpc_url`, checking the chain id when `expected_chain_id` is set.
    pub async fn connect(
        rpc_url: &str,
        account_address: FieldElement,
        private_key: FieldElement,
        expected_chain_id: Option<FieldElement>,
    ) -> Result<Self, RpcError> {
        let url = Url::parse(rpc_url).map_err(|err| RpcError::InvalidUrl {
            url: rpc_url.to_string(),
            reason: err.to_string(),
        })?;
        let provider = JsonRpcClient::new(HttpTransport::new(url));

        let chain_id = provider.chain_id().await?;
        if let Some(expected) = expected_chain_id {
            let actual = FieldElement::from(chain_id);
            if actual != expected {
                return Err(RpcError::ChainMismatch { expected, actual });
            }
        }
        debug!(@grey, "connected to {rpc_url} (chain id {})", FieldElement::from(chain_id));

        let signer = LocalWallet::from(SigningKey::from_secret_scalar(private_key.into()));
        let mut account = SingleOwnerAccount::new(
            provider,
            signer,
            account_address.into(),
            chain_id,
            ExecutionEncoding::New,
        );
        account.set_block_id(BlockId::Tag(BlockTag::Pending));
        Ok(Self { account })
    }
}

impl ChainClient for StarknetRpcClient {
    async fn submit_declare(
        &self,
        attempt: &DeclarationAttempt,
    ) -> Result<DeclareSubmission, ChainError> {
        let result = self
            .account
            .declare_v3(attempt.class(), attempt.compiled_class_hash().into())
            .send()
            .await
            .map_err(account_error)?;
        Ok(DeclareSubmission {
            transaction_hash: result.transaction_hash.into(),
            class_hash: result.class_hash.into(),
        })
    }

    async fn submit_deploy(&self, request: &DeployRequest) -> Result<DeploySubmission, ChainError> {
        let factory = ContractFactory::new(request.class_hash.into(), &self.account);
        let calldata: Vec<Felt> = request.calldata.iter().copied().map(Felt::from).collect();
        let deployment = factory.deploy_v3(calldata, request.salt.into(), request.unique);
        let contract_address = deployment.deployed_address();
        let result = deployment.send().await.map_err(account_error)?;
        Ok(DeploySubmission {
            transaction_hash: result.transaction_hash.into(),
            contract_address: contract_address.into(),
        })
    }

    async fn wait_for_confirmation(
        &self,
        transaction_hash: FieldElement,
        poll_interval: Duration,
    ) -> Result<TransactionReceipt, ChainError> {
        let provider = self.account.provider();
        let hash = Felt::from(transaction_hash);
        loop {
            match provider.get_transaction_receipt(hash).await {
                Ok(receipt) => {
                    let status = match receipt.receipt.execution_result() {
                        ExecutionResult::Succeeded => ExecutionStatus::Succeeded,
                        ExecutionResult::Reverted { reason } => {
                            ExecutionStatus::Reverted(reason.clone())
                        }
                    };
                    return Ok(TransactionReceipt {
                        transaction_hash,
                        status,
                    });
                }
                Err(ProviderError::StarknetError(StarknetError::TransactionHashNotFound)) => {
                    tokio::time::sleep(poll_interval).await;
                }
                Err(err) => return Err(ChainError::other(err)),
            }
        }
    }
}

fn account_error<S>(err: AccountError<S>) -> ChainError
where
    AccountError<S>: fmt::Display,
{
    let kind = match &err {
        AccountError::Provider(ProviderError::StarknetError(
            StarknetError::ClassAlreadyDeclared,
        )) => ChainErrorKind::ClassAlreadyDeclared,
        AccountError::Provider(ProviderError::StarknetError(
            StarknetError::CompiledClassHashMismatch,
        )) => ChainErrorKind::CompiledClassHashMismatch,
        _ => ChainErrorKind::Other,
    };
    ChainError::new(kind, err)
}
