// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize};

use crate::core::network::Network;

pub use contract::TomlContract;
pub use networks::{NetworkConfig, TomlNetwork};

pub mod contract;
pub mod networks;

/// Filename for Starkdeploy.toml manifest files
pub const FILENAME: &str = "Starkdeploy.toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing {}", .0.display())]
    Missing(PathBuf),

    #[error("no contract `{0}` in manifest")]
    UnknownContract(String),

    #[error("no constructor spec named `{0}`")]
    UnknownSpec(String),

    #[error("no rpc_url configured for network `{0}`")]
    MissingRpcUrl(Network),

    #[error("no account_address configured for network `{0}`")]
    MissingAccount(Network),

    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub networks: BTreeMap<Network, TomlNetwork>,
    #[serde(default)]
    pub contracts: BTreeMap<String, TomlContract>,
}

impl Manifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        load(path)
    }

    /// Looks a contract up by its manifest key, ignoring case.
    pub fn contract(&self, name: &str) -> Result<(&str, &TomlContract), ManifestError> {
        self.contracts
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(key, contract)| (key.as_str(), contract))
            .ok_or_else(|| ManifestError::UnknownContract(name.to_string()))
    }

    /// The sole contract, when the manifest only has one.
    pub fn default_contract(&self) -> Option<&str> {
        match self.contracts.len() {
            1 => self.contracts.keys().next().map(String::as_str),
            _ => None,
        }
    }

    pub fn network(&self, network: Network) -> Result<NetworkConfig, ManifestError> {
        let toml = self.networks.get(&network).cloned().unwrap_or_default();
        toml.resolve(network)
    }
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::Missing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(manifest)
}
