// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploy a declared class through the Universal Deployer Contract.

use crate::core::encoding::FieldElement;

/// One `deployContract` call on the UDC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployRequest {
    pub class_hash: FieldElement,
    pub calldata: Vec<FieldElement>,
    pub salt: FieldElement,
    /// Mix the deployer address into the contract address.
    pub unique: bool,
}

impl DeployRequest {
    /// Request with a random salt.
    pub fn new(class_hash: FieldElement, calldata: Vec<FieldElement>) -> Self {
        Self {
            class_hash,
            calldata,
            salt: FieldElement::random(),
            unique: false,
        }
    }

    pub fn with_salt(mut self, salt: FieldElement) -> Self {
        self.salt = salt;
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}
