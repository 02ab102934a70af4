// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! End-to-end operations behind the `starkdeploy` commands.

use typed_builder::TypedBuilder;

use crate::core::{
    chain::ConfirmationConfig,
    encoding::FieldElement,
    manifest::NetworkConfig,
    network::Network,
    rpc::StarknetRpcClient,
};

pub use calldata::calldata;
pub use class_hash::class_hash;
pub use constructor::print_constructor;
pub use declare::declare;
pub use deploy::deploy;

mod calldata;
mod class_hash;
mod constructor;
mod declare;
mod deploy;

/// Where and as whom to send transactions.
#[derive(TypedBuilder)]
pub struct ChainConfig {
    network: Network,
    /// Overrides the manifest endpoint.
    #[builder(default, setter(into))]
    rpc_url: Option<String>,
    /// Overrides the manifest account.
    #[builder(default, setter(into))]
    account_address: Option<FieldElement>,
    private_key: FieldElement,
    #[builder(default)]
    confirmation: ConfirmationConfig,
}

impl ChainConfig {
    async fn connect(&self, network: &NetworkConfig) -> crate::Result<StarknetRpcClient> {
        let account = match self.account_address {
            Some(address) => address,
            None => network.account_address()?,
        };
        debug!(@grey, "using account {account} on {}", network.network);
        let client = StarknetRpcClient::connect(
            &network.rpc_url,
            account,
            self.private_key,
            network.network.chain_id(),
        )
        .await?;
        Ok(client)
    }
}
