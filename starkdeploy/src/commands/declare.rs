// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use starkdeploy_tools::{core::declaration::DeclarationOutcome, ops};

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
}

pub async fn exec(args: Args) -> StarkdeployResult {
    let project = args.manifest.project()?;
    let config = args.chain.config()?;
    let outcome = ops::declare(&project, args.manifest.contract(), &config).await?;
    match outcome {
        DeclarationOutcome::Declared {
            class_hash,
            transaction_hash,
        } => {
            println!("declared class {class_hash}");
            println!("declaration tx hash: {transaction_hash}");
        }
        DeclarationOutcome::AlreadyDeclared { class_hash } => {
            println!("class {class_hash} already declared");
        }
    }
    Ok(())
}
