// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Encoding(#[from] crate::core::encoding::EncodingError),
    #[error("{0}")]
    Artifact(#[from] crate::core::artifact::ArtifactError),
    #[error("{0}")]
    Manifest(#[from] crate::core::manifest::ManifestError),
    #[error("{0}")]
    Project(#[from] crate::core::project::ProjectError),
    #[error("{0}")]
    Declare(#[from] crate::core::declaration::DeclareError),
    #[error("{0}")]
    Deploy(#[from] crate::core::deployment::DeployError),
    #[error("{0}")]
    Lifecycle(#[from] crate::core::deployment::LifecycleError),
    #[error("{0}")]
    History(#[from] crate::core::history::HistoryError),
    #[error("{0}")]
    Rpc(#[from] crate::core::rpc::RpcError),
}
