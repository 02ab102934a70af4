// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use starkdeploy_tools::{core::network::Network, ops, utils::felts_to_json};

use crate::{common_args::ManifestArgs, error::StarkdeployResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    manifest: ManifestArgs,
    /// Network whose constructor arguments are used
    #[arg(long, value_enum, default_value_t = Network::Local)]
    network: Network,
}

pub fn exec(args: Args) -> StarkdeployResult {
    let project = args.manifest.project()?;
    let calldata = ops::calldata(&project, args.manifest.contract(), args.network)?;
    println!("{}", felts_to_json(&calldata)?);
    Ok(())
}
