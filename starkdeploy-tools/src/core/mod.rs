// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod artifact;
pub mod calldata;
pub mod chain;
pub mod contracts;
pub mod declaration;
pub mod deployment;
pub mod encoding;
pub mod history;
pub mod manifest;
pub mod network;
pub mod project;
pub mod record;
pub mod rpc;
