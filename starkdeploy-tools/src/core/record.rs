// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{encoding::FieldElement, network::Network};

/// Outcome of a completed declare and deploy run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeploymentRecord {
    contract_name: String,
    class_hash: FieldElement,
    deployed_address: FieldElement,
    transaction_hash: FieldElement,
    deployment_time: DateTime<Utc>,
    network: Network,
}

impl DeploymentRecord {
    pub fn new(
        contract_name: impl Into<String>,
        class_hash: FieldElement,
        deployed_address: FieldElement,
        transaction_hash: FieldElement,
        deployment_time: DateTime<Utc>,
        network: Network,
    ) -> Self {
        Self {
            contract_name: contract_name.into(),
            class_hash,
            deployed_address,
            transaction_hash,
            deployment_time,
            network,
        }
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    pub fn class_hash(&self) -> FieldElement {
        self.class_hash
    }

    pub fn deployed_address(&self) -> FieldElement {
        self.deployed_address
    }

    /// Hash of the deploy transaction.
    pub fn transaction_hash(&self) -> FieldElement {
        self.transaction_hash
    }

    pub fn deployment_time(&self) -> DateTime<Utc> {
        self.deployment_time
    }

    pub fn network(&self) -> Network {
        self.network
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn serializes_hashes_as_hex() {
        let record = DeploymentRecord::new(
            "Ethrx",
            FieldElement::from_u64(0x10),
            FieldElement::from_u64(0x20),
            FieldElement::from_u64(0x30),
            Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            Network::Testnet,
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["contract_name"], "Ethrx");
        assert_eq!(json["class_hash"], "0x10");
        assert_eq!(json["deployed_address"], "0x20");
        assert_eq!(json["network"], "testnet");
        assert_eq!(json["deployment_time"], "2025-01-02T03:04:05Z");
    }
}
