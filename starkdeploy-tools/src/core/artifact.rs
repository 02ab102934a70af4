// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Scarb emits a Sierra class (`*.contract_class.json`) and its CASM compilation
//! (`*.compiled_contract_class.json`). Both are read, parsed, and hashed locally before anything
//! touches the network.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;
use starknet::core::types::{
    contract::{CompiledClass, SierraClass},
    FlattenedSierraClass,
};

use crate::core::{calldata::AbiParam, encoding::FieldElement};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to parse {}: {reason}", .path.display())]
    ParseFailed { path: PathBuf, reason: String },
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything needed to submit one declaration.
#[derive(Clone, Debug)]
pub struct DeclarationAttempt {
    class: Arc<FlattenedSierraClass>,
    class_hash: FieldElement,
    compiled_class_hash: FieldElement,
    constructor: Vec<AbiParam>,
}

impl DeclarationAttempt {
    /// Loads and hashes a Sierra/CASM artifact pair.
    pub fn load(sierra: impl AsRef<Path>, casm: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let sierra = sierra.as_ref();
        let casm = casm.as_ref();
        let sierra_json = read(sierra)?;
        let casm_json = read(casm)?;

        let sierra_class: SierraClass = parse_json(sierra, &sierra_json)?;
        let class_hash = sierra_class
            .class_hash()
            .map_err(|err| parse_failed(sierra, err))?;
        let class = sierra_class
            .flatten()
            .map_err(|err| parse_failed(sierra, err))?;

        let compiled: CompiledClass = parse_json(casm, &casm_json)?;
        let compiled_class_hash = compiled
            .class_hash()
            .map_err(|err| parse_failed(casm, err))?;

        let constructor = constructor_inputs(&class.abi).map_err(|err| parse_failed(sierra, err))?;
        debug!(@grey, "loaded artifacts {} and {}", sierra.display(), casm.display());

        Ok(Self {
            class: Arc::new(class),
            class_hash: class_hash.into(),
            compiled_class_hash: compiled_class_hash.into(),
            constructor,
        })
    }

    /// Assembles an attempt from already-computed parts.
    pub fn from_parts(
        class: FlattenedSierraClass,
        class_hash: FieldElement,
        compiled_class_hash: FieldElement,
        constructor: Vec<AbiParam>,
    ) -> Self {
        Self {
            class: Arc::new(class),
            class_hash,
            compiled_class_hash,
            constructor,
        }
    }

    pub fn class(&self) -> Arc<FlattenedSierraClass> {
        self.class.clone()
    }

    /// Class hash computed from the Sierra artifact.
    pub fn class_hash(&self) -> FieldElement {
        self.class_hash
    }

    pub fn compiled_class_hash(&self) -> FieldElement {
        self.compiled_class_hash
    }

    /// Constructor inputs listed in the Sierra ABI. Empty when the class has no constructor.
    pub fn constructor_abi(&self) -> &[AbiParam] {
        &self.constructor
    }
}

/// Reads the constructor inputs from a Sierra artifact alone.
pub fn read_constructor_abi(sierra: impl AsRef<Path>) -> Result<Vec<AbiParam>, ArtifactError> {
    #[derive(Deserialize)]
    struct SierraAbi {
        #[serde(default)]
        abi: Vec<AbiItem>,
    }

    let sierra = sierra.as_ref();
    let json = read(sierra)?;
    let SierraAbi { abi } = parse_json(sierra, &json)?;
    Ok(constructor_of(abi))
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum AbiItem {
    Constructor {
        #[serde(default)]
        inputs: Vec<AbiParam>,
    },
    #[serde(other)]
    Other,
}

fn constructor_inputs(abi: &str) -> Result<Vec<AbiParam>, serde_json::Error> {
    if abi.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(constructor_of(serde_json::from_str(abi)?))
}

fn constructor_of(items: Vec<AbiItem>) -> Vec<AbiParam> {
    items
        .into_iter()
        .find_map(|item| match item {
            AbiItem::Constructor { inputs } => Some(inputs),
            AbiItem::Other => None,
        })
        .unwrap_or_default()
}

fn read(path: &Path) -> Result<String, ArtifactError> {
    if !path.is_file() {
        return Err(ArtifactError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, json: &str) -> Result<T, ArtifactError> {
    serde_json::from_str(json).map_err(|err| parse_failed(path, err))
}

fn parse_failed(path: &Path, err: impl std::fmt::Display) -> ArtifactError {
    ArtifactError::ParseFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
