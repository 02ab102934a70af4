// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Calldata, declaration, and deployment as one run.

use std::time::Duration;

use chrono::Utc;
use typed_builder::TypedBuilder;

use super::{deploy, DeployError, DeployRequest};
use crate::core::{
    artifact::DeclarationAttempt,
    calldata::{CalldataBuilder, ConstructorArgs, ConstructorSpec},
    chain::{ChainClient, ConfirmationConfig},
    declaration::{DeclarationOrchestrator, DeclarationOutcome, DeclareError},
    encoding::{EncodingError, FieldElement},
    network::Network,
    record::DeploymentRecord,
};

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("{0}")]
    Encoding(#[from] EncodingError),
    #[error("{0}")]
    Declare(#[from] DeclareError),
    #[error("{0}")]
    Deploy(#[from] DeployError),
}

/// A fully resolved deployment of one contract to one network.
#[derive(Debug, TypedBuilder)]
pub struct DeploymentPlan {
    #[builder(setter(into))]
    contract_name: String,
    network: Network,
    spec: ConstructorSpec,
    args: ConstructorArgs,
    /// Interface hash the constructor must have.
    #[builder(default, setter(into))]
    interface_hash: Option<String>,
    /// Random when unset.
    #[builder(default, setter(into))]
    salt: Option<FieldElement>,
    #[builder(default)]
    unique: bool,
    /// Pause between a fresh declaration and the deploy.
    #[builder(default)]
    settle_delay: Duration,
    #[builder(default)]
    confirmation: ConfirmationConfig,
}

impl DeploymentPlan {
    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn spec(&self) -> &ConstructorSpec {
        &self.spec
    }

    /// Checks the constructor against the pinned interface and the artifact ABI, then encodes the
    /// constructor arguments.
    pub fn calldata(
        &self,
        attempt: &DeclarationAttempt,
    ) -> Result<Vec<FieldElement>, EncodingError> {
        if let Some(expected) = &self.interface_hash {
            self.spec.ensure_interface(expected)?;
        }
        self.spec.ensure_matches_abi(attempt.constructor_abi())?;
        CalldataBuilder::new(&self.spec).build(&self.args)
    }

    /// Runs the plan. Nothing is sent unless the calldata encodes.
    pub async fn execute(
        &self,
        client: &impl ChainClient,
        attempt: &DeclarationAttempt,
    ) -> Result<DeploymentRecord, LifecycleError> {
        let calldata = self.calldata(attempt)?;
        debug!(@grey, "constructor calldata: {} felts", calldata.len());

        let mut declaration = DeclarationOrchestrator::new(client, self.confirmation);
        let outcome = declaration.declare(attempt).await?;
        let class_hash = outcome.class_hash();

        if matches!(outcome, DeclarationOutcome::Declared { .. }) && !self.settle_delay.is_zero() {
            info!(@grey, "waiting {:?} for the declaration to settle", self.settle_delay);
            tokio::time::sleep(self.settle_delay).await;
        }

        let mut request = DeployRequest::new(class_hash, calldata).with_unique(self.unique);
        if let Some(salt) = self.salt {
            request = request.with_salt(salt);
        }
        let deployed = deploy(client, &request, &self.confirmation).await?;

        Ok(DeploymentRecord::new(
            self.contract_name.clone(),
            class_hash,
            deployed.address,
            deployed.transaction_hash,
            Utc::now(),
            self.network,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{calldata::ParamKind, chain::ChainError},
        utils::testing::{declaration_attempt, sample_args, sample_spec, MockChainClient},
    };

    fn plan() -> DeploymentPlan {
        DeploymentPlan::builder()
            .contract_name("Sample")
            .network(Network::Local)
            .spec(sample_spec())
            .args(sample_args())
            .salt(FieldElement::from_u64(42))
            .build()
    }

    #[tokio::test]
    async fn declares_then_deploys() {
        let client = MockChainClient::default();
        let attempt = declaration_attempt();
        let record = plan().execute(&client, &attempt).await.unwrap();

        assert_eq!(record.contract_name(), "Sample");
        assert_eq!(record.class_hash(), attempt.class_hash());
        assert_eq!(record.deployed_address(), MockChainClient::CONTRACT_ADDRESS);
        assert_eq!(record.transaction_hash(), MockChainClient::DEPLOY_TX);
        assert_eq!(record.network(), Network::Local);

        let requests = client.deploy_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].class_hash, attempt.class_hash());
        assert_eq!(requests[0].salt, FieldElement::from_u64(42));
        assert_eq!(
            requests[0].calldata,
            CalldataBuilder::new(&sample_spec()).build(&sample_args()).unwrap()
        );
    }

    #[tokio::test]
    async fn already_declared_still_deploys() {
        let client = MockChainClient::default()
            .rejects_declare(ChainError::other("class already declared"));
        let attempt = declaration_attempt();
        let record = plan().execute(&client, &attempt).await.unwrap();
        assert_eq!(record.class_hash(), attempt.class_hash());
        assert_eq!(client.deploy_requests().len(), 1);
    }

    #[tokio::test]
    async fn missing_field_before_any_network_call() {
        let mut args = sample_args();
        args.remove("supply");
        let plan = DeploymentPlan::builder()
            .contract_name("Sample")
            .network(Network::Local)
            .spec(sample_spec())
            .args(args)
            .build();

        let client = MockChainClient::default();
        match plan.execute(&client, &declaration_attempt()).await {
            Err(LifecycleError::Encoding(EncodingError::MissingField(name))) => {
                assert_eq!(name, "supply")
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(client.declare_calls(), 0);
    }

    #[tokio::test]
    async fn reordered_spec_is_rejected() {
        let spec = ConstructorSpec::new(
            "Sample",
            [("supply", ParamKind::U256), ("owner", ParamKind::Address)],
        );
        let plan = DeploymentPlan::builder()
            .contract_name("Sample")
            .network(Network::Local)
            .spec(spec)
            .args(sample_args())
            .build();

        let client = MockChainClient::default();
        let err = plan.execute(&client, &declaration_attempt()).await.unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::Encoding(EncodingError::AbiMismatch { position: 0, .. })
        ));
        assert_eq!(client.declare_calls(), 0);
    }

    #[tokio::test]
    async fn pinned_interface_hash() {
        let plan = DeploymentPlan::builder()
            .contract_name("Sample")
            .network(Network::Local)
            .spec(sample_spec())
            .args(sample_args())
            .interface_hash(Some("0xdeadbeef".to_string()))
            .build();
        let client = MockChainClient::default();
        let err = plan.execute(&client, &declaration_attempt()).await.unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::Encoding(EncodingError::InterfaceMismatch { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn settles_after_fresh_declaration() {
        let plan = DeploymentPlan::builder()
            .contract_name("Sample")
            .network(Network::Local)
            .spec(sample_spec())
            .args(sample_args())
            .settle_delay(Duration::from_secs(5))
            .build();
        let client = MockChainClient::default();
        let start = tokio::time::Instant::now();
        plan.execute(&client, &declaration_attempt()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test]
    async fn hash_mismatch_never_deploys() {
        let client = MockChainClient::default()
            .rejects_declare(ChainError::other("Mismatch compiled class hash"));
        let err = plan()
            .execute(&client, &declaration_attempt())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::Declare(DeclareError::HashMismatch { .. })
        ));
        assert!(client.deploy_requests().is_empty());
    }
}
