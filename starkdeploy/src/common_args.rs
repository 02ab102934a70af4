// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, time::Duration};

use eyre::{bail, Context};
use starkdeploy_tools::{
    core::{
        chain::ConfirmationConfig, encoding::FieldElement, network::Network, project::Project,
    },
    ops::ChainConfig,
    utils::read_felt_file,
};

use crate::constants::{DEFAULT_MANIFEST, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, clap::Args)]
pub struct ManifestArgs {
    /// Path to the deployment manifest
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,
    /// Contract to operate on; required when the manifest lists more than one
    #[arg(long)]
    contract: Option<String>,
}

impl ManifestArgs {
    pub fn project(&self) -> eyre::Result<Project> {
        Project::load(&self.manifest)
            .wrap_err_with(|| format!("could not load {}", self.manifest.display()))
    }

    pub fn contract(&self) -> Option<&str> {
        self.contract.as_deref()
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network to target
    #[arg(long, value_enum, default_value_t = Network::Local)]
    pub network: Network,
    /// Starknet RPC endpoint, overriding the manifest
    #[arg(long)]
    rpc_url: Option<String>,
    /// Account contract that signs transactions, overriding the manifest
    #[arg(long, value_parser = FieldElement::from_hex)]
    account_address: Option<FieldElement>,
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
}

impl AuthArgs {
    fn private_key(&self) -> eyre::Result<FieldElement> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                bail!("empty private key");
            }
            return FieldElement::from_hex(key.trim()).wrap_err("invalid private key");
        }
        if let Some(file) = &self.private_key_path {
            return read_felt_file(file).wrap_err("could not read private key file");
        }
        bail!("no private key, pass --private-key or --private-key-path")
    }
}

#[derive(Debug, clap::Args)]
pub struct ConfirmationArgs {
    /// Seconds between transaction receipt polls
    #[arg(long, default_value = DEFAULT_POLL_INTERVAL_SECS)]
    poll_interval_secs: u64,
    /// Seconds to wait for a transaction to be accepted
    #[arg(long, default_value = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl ConfirmationArgs {
    pub fn config(&self) -> ConfirmationConfig {
        ConfirmationConfig {
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Everything needed to send transactions.
#[derive(Debug, clap::Args)]
pub struct ChainArgs {
    #[command(flatten)]
    pub network: NetworkArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    confirmation: ConfirmationArgs,
}

impl ChainArgs {
    pub fn config(&self) -> eyre::Result<ChainConfig> {
        Ok(ChainConfig::builder()
            .network(self.network.network)
            .rpc_url(self.network.rpc_url.clone())
            .account_address(self.network.account_address)
            .private_key(self.auth.private_key()?)
            .confirmation(self.confirmation.config())
            .build())
    }
}
