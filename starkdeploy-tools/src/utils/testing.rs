// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! In-memory chain client and fixtures for unit tests.

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use starknet::core::types::{EntryPointsByType, FlattenedSierraClass};

use crate::core::{
    artifact::DeclarationAttempt,
    calldata::{AbiParam, ArgValue, ConstructorArgs, ConstructorSpec, ParamKind},
    chain::{
        ChainClient, ChainError, DeclareSubmission, DeploySubmission, ExecutionStatus,
        TransactionReceipt,
    },
    deployment::DeployRequest,
    encoding::FieldElement,
};

#[derive(Debug, Default)]
enum Confirmation {
    #[default]
    Succeeds,
    Reverts(String),
    Never,
}

/// Scripted [`ChainClient`] that records what it was asked to do.
#[derive(Debug, Default)]
pub struct MockChainClient {
    declare_error: Option<ChainError>,
    deploy_error: Option<ChainError>,
    confirmation: Confirmation,
    declare_calls: AtomicUsize,
    polls: AtomicUsize,
    deploy_requests: Mutex<Vec<DeployRequest>>,
}

impl MockChainClient {
    pub const DECLARE_TX: FieldElement = felt(0xdec1);
    pub const DEPLOY_TX: FieldElement = felt(0xde91);
    pub const CONTRACT_ADDRESS: FieldElement = felt(0xc0ffee);

    pub fn rejects_declare(mut self, err: ChainError) -> Self {
        self.declare_error = Some(err);
        self
    }

    pub fn fails_deploy(mut self, message: &str) -> Self {
        self.deploy_error = Some(ChainError::other(message));
        self
    }

    pub fn reverts(mut self, reason: &str) -> Self {
        self.confirmation = Confirmation::Reverts(reason.to_string());
        self
    }

    pub fn never_confirms(mut self) -> Self {
        self.confirmation = Confirmation::Never;
        self
    }

    pub fn declare_calls(&self) -> usize {
        self.declare_calls.load(Ordering::SeqCst)
    }

    pub fn confirmation_polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    pub fn deploy_requests(&self) -> Vec<DeployRequest> {
        self.deploy_requests.lock().unwrap().clone()
    }
}

impl ChainClient for MockChainClient {
    async fn submit_declare(
        &self,
        attempt: &DeclarationAttempt,
    ) -> Result<DeclareSubmission, ChainError> {
        self.declare_calls.fetch_add(1, Ordering::SeqCst);
        match &self.declare_error {
            Some(err) => Err(err.clone()),
            None => Ok(DeclareSubmission {
                transaction_hash: Self::DECLARE_TX,
                class_hash: attempt.class_hash(),
            }),
        }
    }

    async fn submit_deploy(&self, request: &DeployRequest) -> Result<DeploySubmission, ChainError> {
        if let Some(err) = &self.deploy_error {
            return Err(err.clone());
        }
        self.deploy_requests.lock().unwrap().push(request.clone());
        Ok(DeploySubmission {
            transaction_hash: Self::DEPLOY_TX,
            contract_address: Self::CONTRACT_ADDRESS,
        })
    }

    async fn wait_for_confirmation(
        &self,
        transaction_hash: FieldElement,
        poll_interval: Duration,
    ) -> Result<TransactionReceipt, ChainError> {
        loop {
            self.polls.fetch_add(1, Ordering::SeqCst);
            let status = match &self.confirmation {
                Confirmation::Succeeds => ExecutionStatus::Succeeded,
                Confirmation::Reverts(reason) => ExecutionStatus::Reverted(reason.clone()),
                Confirmation::Never => {
                    tokio::time::sleep(poll_interval).await;
                    continue;
                }
            };
            return Ok(TransactionReceipt {
                transaction_hash,
                status,
            });
        }
    }
}

const fn felt(value: u64) -> FieldElement {
    FieldElement::from_u64(value)
}

/// Constructor of the sample contract: `owner: ContractAddress, supply: u256`.
pub fn sample_spec() -> ConstructorSpec {
    ConstructorSpec::new(
        "Sample",
        [("owner", ParamKind::Address), ("supply", ParamKind::U256)],
    )
}

pub fn sample_args() -> ConstructorArgs {
    [
        ("owner".to_string(), ArgValue::from("0x1234")),
        ("supply".to_string(), ArgValue::Integer(1000)),
    ]
    .into_iter()
    .collect()
}

/// Class hash of the token class under `testdata/`.
pub const TOKEN_CLASS_HASH: &str =
    "0x724c6b87c9a073be1f6f7e81ebee3513f0a078f149eb7c30b46d53f8cb7836";
/// Compiled class hash of the token CASM under `testdata/`.
pub const TOKEN_COMPILED_CLASS_HASH: &str =
    "0x4d5fe41adfab3214849500baf118a78d0653413422a88f04838cf5e80c6639b";

/// Paths of the token Sierra class and its CASM compilation.
pub fn token_artifacts() -> (PathBuf, PathBuf) {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata");
    (
        dir.join("token.contract_class.json"),
        dir.join("token.compiled_contract_class.json"),
    )
}

/// A declaration of the sample contract with fixed hashes.
pub fn declaration_attempt() -> DeclarationAttempt {
    let class = FlattenedSierraClass {
        sierra_program: vec![],
        contract_class_version: "0.1.0".to_string(),
        entry_points_by_type: EntryPointsByType {
            constructor: vec![],
            external: vec![],
            l1_handler: vec![],
        },
        abi: String::new(),
    };
    let constructor = [
        ("owner", "core::starknet::contract_address::ContractAddress"),
        ("supply", "core::integer::u256"),
    ]
    .into_iter()
    .map(|(name, ty)| AbiParam {
        name: name.to_string(),
        ty: ty.to_string(),
    })
    .collect();
    DeclarationAttempt::from_parts(class, felt(0x5a1e), felt(0xca5e), constructor)
}
