// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use starkdeploy_tools::{
    core::history::{self, DeploymentHistory},
    ops,
};

use crate::{
    common_args::{ChainArgs, ManifestArgs},
    error::StarkdeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    manifest: ManifestArgs,
    #[command(flatten)]
    chain: ChainArgs,
    /// Directory holding the per-network deployment history files
    #[arg(long, default_value = history::DEFAULT_DIR)]
    history_dir: PathBuf,
    /// Do not record the deployment in the history file
    #[arg(long)]
    no_history: bool,
}

pub async fn exec(args: Args) -> StarkdeployResult {
    let project = args.manifest.project()?;
    let config = args.chain.config()?;
    let history = (!args.no_history).then(|| DeploymentHistory::new(&args.history_dir));
    ops::deploy(&project, args.manifest.contract(), &config, history.as_ref()).await?;
    Ok(())
}
