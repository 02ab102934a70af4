// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Markdown deployment history, one file per network.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use crate::core::{network::Network, record::DeploymentRecord};

/// Default directory for history files.
pub const DEFAULT_DIR: &str = "exports";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, thiserror::Error)]
#[error("failed to write deployment history to {}: {source}", .path.display())]
pub struct HistoryError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

#[derive(Debug, Clone)]
pub struct DeploymentHistory {
    dir: PathBuf,
}

impl Default for DeploymentHistory {
    fn default() -> Self {
        Self::new(DEFAULT_DIR)
    }
}

impl DeploymentHistory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, network: Network) -> PathBuf {
        self.dir.join(format!("{network}.md"))
    }

    /// Appends `record` to its network's file, creating the file with a header if needed.
    pub fn append(&self, record: &DeploymentRecord) -> Result<PathBuf, HistoryError> {
        let path = self.path(record.network());
        let with_path = |source| HistoryError {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(with_path)?;
        let is_new = !path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(with_path)?;

        let mut text = String::new();
        if is_new {
            text.push_str(&header(record.network()));
        }
        text.push_str(&entry(record));
        file.write_all(text.as_bytes()).map_err(with_path)?;

        debug!(@grey, "recorded deployment in {}", path.display());
        Ok(path)
    }
}

fn header(network: Network) -> String {
    format!("# {} Deployment History\n\n", network.title())
}

fn entry(record: &DeploymentRecord) -> String {
    let timestamp = record.deployment_time().format(TIMESTAMP_FORMAT);
    format!(
        "## Deployment - {timestamp}\n\
         \n\
         - **Contract**: {}\n\
         - **Class Hash**: `{}`\n\
         - **Deployed Address**: `{}`\n\
         - **Transaction Hash**: `{}`\n\
         - **Timestamp**: {timestamp}\n\
         \n\
         ---\n\
         \n",
        record.contract_name(),
        record.class_hash(),
        record.deployed_address(),
        record.transaction_hash(),
    )
}
