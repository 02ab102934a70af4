// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! A directory holding a `Starkdeploy.toml` and the contracts it describes.

use std::path::{Path, PathBuf};

use crate::core::{
    artifact::{self, ArtifactError, DeclarationAttempt},
    calldata::{AbiParam, ConstructorArgs, ConstructorSpec},
    contracts,
    manifest::{self, Manifest, ManifestError, NetworkConfig, TomlContract},
    network::Network,
};

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("{0}")]
    Manifest(#[from] ManifestError),
    #[error("manifest has {0} contracts, pick one with --contract")]
    AmbiguousContract(usize),
}

#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    manifest: Manifest,
}

impl Project {
    /// Loads the manifest at `path`; artifact paths resolve against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let manifest = manifest::load(path)?;
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self { root, manifest })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Settings for `network`, with `rpc_url` taking precedence over the manifest.
    pub fn network(
        &self,
        network: Network,
        rpc_url: Option<&str>,
    ) -> Result<NetworkConfig, ProjectError> {
        let mut toml = self.manifest.networks.get(&network).cloned().unwrap_or_default();
        if let Some(url) = rpc_url {
            toml.rpc_url = Some(url.to_string());
        }
        Ok(toml.resolve(network)?)
    }

    /// Selects a contract by name, or the only one if `name` is `None`.
    pub fn contract(&self, name: Option<&str>) -> Result<Contract<'_>, ProjectError> {
        let (name, toml) = match name {
            Some(name) => self.manifest.contract(name)?,
            None => {
                let name = self
                    .manifest
                    .default_contract()
                    .ok_or(ProjectError::AmbiguousContract(self.manifest.contracts.len()))?;
                self.manifest.contract(name)?
            }
        };
        Ok(Contract {
            name,
            toml,
            root: &self.root,
        })
    }
}

/// One `[contracts.<name>]` entry of a project.
#[derive(Debug)]
pub struct Contract<'a> {
    name: &'a str,
    toml: &'a TomlContract,
    root: &'a Path,
}

impl Contract<'_> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn sierra_path(&self) -> PathBuf {
        self.root.join(&self.toml.sierra_path)
    }

    pub fn casm_path(&self) -> PathBuf {
        self.root.join(&self.toml.casm_path)
    }

    pub fn toml(&self) -> &TomlContract {
        self.toml
    }

    pub fn load_artifacts(&self) -> Result<DeclarationAttempt, ArtifactError> {
        DeclarationAttempt::load(self.sierra_path(), self.casm_path())
    }

    /// Constructor inputs from the Sierra artifact. The CASM artifact is not needed.
    pub fn constructor_abi(&self) -> Result<Vec<AbiParam>, ArtifactError> {
        artifact::read_constructor_abi(self.sierra_path())
    }

    pub fn args(&self, network: Network) -> ConstructorArgs {
        self.toml.args_for(network)
    }

    /// The built-in spec this contract names, if any.
    pub fn registry_spec(&self) -> Result<Option<ConstructorSpec>, ManifestError> {
        self.toml
            .spec
            .as_deref()
            .map(|name| {
                contracts::lookup(name).ok_or_else(|| ManifestError::UnknownSpec(name.into()))
            })
            .transpose()
    }

    /// Constructor spec for this contract, derived from `abi` unless a built-in one is named.
    pub fn spec(&self, abi: &[AbiParam]) -> Result<ConstructorSpec, ManifestError> {
        self.toml.constructor_spec(self.name, abi)
    }
}
