// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::encoding::FieldElement;

/// RPC endpoint of a local devnet (`starknet-devnet`).
pub const LOCAL_RPC_URL: &str = "http://localhost:5050/rpc";

/// Chain id of Starknet Sepolia, `"SN_SEPOLIA"` as a short string.
pub const SEPOLIA_CHAIN_ID: &str = "0x534e5f5345504f4c4941";

/// Chain id of Starknet mainnet, `"SN_MAIN"` as a short string.
pub const MAINNET_CHAIN_ID: &str = "0x534e5f4d41494e";

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Network {
    Local,
    Testnet,
    Mainnet,
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Testnet => "testnet",
            Self::Mainnet => "mainnet",
        }
    }

    /// Capitalized name used in reports.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Testnet => "Testnet",
            Self::Mainnet => "Mainnet",
        }
    }

    /// Endpoint used when the manifest does not name one.
    pub fn default_rpc_url(&self) -> Option<&'static str> {
        match self {
            Self::Local => Some(LOCAL_RPC_URL),
            Self::Testnet | Self::Mainnet => None,
        }
    }

    /// Expected chain id, if it is fixed.
    pub fn chain_id(&self) -> Option<FieldElement> {
        let id = match self {
            Self::Local => return None,
            Self::Testnet => SEPOLIA_CHAIN_ID,
            Self::Mainnet => MAINNET_CHAIN_ID,
        };
        FieldElement::from_hex(id).ok()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown network `{0}`, expected one of local, testnet, mainnet")]
pub struct UnknownNetwork(String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "testnet" | "sepolia" => Ok(Self::Testnet),
            "mainnet" => Ok(Self::Mainnet),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

impl TryFrom<String> for Network {
    type Error = UnknownNetwork;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
