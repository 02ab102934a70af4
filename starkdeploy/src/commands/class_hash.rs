// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use starkdeploy_tools::ops;

use crate::{common_args::ManifestArgs, error::StarkdeployResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    manifest: ManifestArgs,
}

pub fn exec(args: Args) -> StarkdeployResult {
    let project = args.manifest.project()?;
    let (class_hash, compiled_class_hash) = ops::class_hash(&project, args.manifest.contract())?;
    println!("class hash: {class_hash}");
    println!("compiled class hash: {compiled_class_hash}");
    Ok(())
}
