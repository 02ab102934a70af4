// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::{StarkdeployError, StarkdeployResult};

mod calldata;
mod class_hash;
mod constructor;
mod declare;
mod deploy;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Encode a contract's constructor calldata without touching the network
    Calldata(calldata::Args),
    /// Compute the class hash of a contract's compiled artifacts
    ClassHash(class_hash::Args),
    /// Print the signature of a contract's constructor
    Constructor(constructor::Args),
    /// Declare a contract class
    Declare(declare::Args),
    /// Declare and deploy a contract
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
}

pub async fn exec(cmd: Command) -> StarkdeployResult {
    let run = async {
        match cmd {
            Command::Calldata(args) => calldata::exec(args),
            Command::ClassHash(args) => class_hash::exec(args),
            Command::Constructor(args) => constructor::exec(args),
            Command::Declare(args) => declare::exec(args).await,
            Command::Deploy(args) => deploy::exec(args).await,
        }
    };
    tokio::select! {
        result = run => result,
        _ = tokio::signal::ctrl_c() => Err(StarkdeployError::interrupted()),
    }
}
