// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::time::Duration;

use serde::Deserialize;

use super::ManifestError;
use crate::core::{encoding::FieldElement, network::Network};

/// Seconds to wait between a fresh declaration and the deploy.
pub const DEFAULT_DECLARATION_DELAY_SECS: u64 = 5;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlNetwork {
    pub rpc_url: Option<String>,
    pub account_address: Option<FieldElement>,
    pub declaration_delay_secs: Option<u64>,
}

/// Network settings with defaults applied.
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    pub network: Network,
    pub rpc_url: String,
    pub account_address: Option<FieldElement>,
    pub declaration_delay: Duration,
}

impl NetworkConfig {
    pub fn account_address(&self) -> Result<FieldElement, ManifestError> {
        self.account_address
            .ok_or(ManifestError::MissingAccount(self.network))
    }
}

impl TomlNetwork {
    pub fn resolve(self, network: Network) -> Result<NetworkConfig, ManifestError> {
        let rpc_url = self
            .rpc_url
            .or_else(|| network.default_rpc_url().map(str::to_string))
            .ok_or(ManifestError::MissingRpcUrl(network))?;
        let delay = self
            .declaration_delay_secs
            .unwrap_or(DEFAULT_DECLARATION_DELAY_SECS);
        Ok(NetworkConfig {
            network,
            rpc_url,
            account_address: self.account_address,
            declaration_delay: Duration::from_secs(delay),
        })
    }
}
