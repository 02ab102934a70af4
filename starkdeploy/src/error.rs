// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type StarkdeployResult = Result<(), StarkdeployError>;

/// Exit code when the user interrupts a command.
const INTERRUPTED: u8 = 130;

#[derive(Debug)]
pub struct StarkdeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl StarkdeployError {
    pub fn interrupted() -> Self {
        Self {
            error: eyre::eyre!("interrupted"),
            exit_code: ExitCode::from(INTERRUPTED),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for StarkdeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for StarkdeployError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for StarkdeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<starkdeploy_tools::Error> for StarkdeployError {
    fn from(err: starkdeploy_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
