// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Constructor schemas.
//!
//! A [`ConstructorSpec`] fixes the order and type of every constructor argument. Its interface
//! hash can be pinned in configuration, and it is checked against the constructor entry of the
//! Sierra ABI before any calldata is submitted.

use std::fmt;

use serde::Deserialize;
use tiny_keccak::{Hasher, Keccak};

use crate::core::encoding::EncodingError;

/// How a single constructor argument is serialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// `ContractAddress`, a single hex felt.
    Address,
    /// `felt252` or `ClassHash`, a single hex felt.
    Felt,
    /// `ByteArray`, spread over `3 + n` felts.
    ByteArray,
    /// `u256`, low then high 128-bit limbs.
    U256,
    /// `u8` through `u128`, a single decimal felt.
    Uint { bits: u16 },
}

impl ParamKind {
    /// Maps a fully-qualified Cairo type from a Sierra ABI.
    pub fn from_cairo_type(ty: &str) -> Result<Self, EncodingError> {
        let kind = match ty {
            "core::starknet::contract_address::ContractAddress" => Self::Address,
            "core::felt252" | "core::starknet::class_hash::ClassHash" => Self::Felt,
            "core::byte_array::ByteArray" => Self::ByteArray,
            "core::integer::u256" => Self::U256,
            "core::integer::u8" => Self::Uint { bits: 8 },
            "core::integer::u16" => Self::Uint { bits: 16 },
            "core::integer::u32" => Self::Uint { bits: 32 },
            "core::integer::u64" => Self::Uint { bits: 64 },
            "core::integer::u128" => Self::Uint { bits: 128 },
            _ => return Err(EncodingError::UnsupportedType(ty.to_string())),
        };
        Ok(kind)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => f.write_str("ContractAddress"),
            Self::Felt => f.write_str("felt252"),
            Self::ByteArray => f.write_str("ByteArray"),
            Self::U256 => f.write_str("u256"),
            Self::Uint { bits } => write!(f, "u{bits}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
}

/// One constructor input as listed in a Sierra ABI.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AbiParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

pub type InterfaceHash = [u8; 32];

/// Ordered, typed constructor parameters of one contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorSpec {
    contract: String,
    params: Vec<Param>,
}

impl ConstructorSpec {
    pub fn new<'a>(
        contract: impl Into<String>,
        params: impl IntoIterator<Item = (&'a str, ParamKind)>,
    ) -> Self {
        Self {
            contract: contract.into(),
            params: params
                .into_iter()
                .map(|(name, kind)| Param {
                    name: name.to_string(),
                    kind,
                })
                .collect(),
        }
    }

    /// Derives a spec directly from the constructor inputs of a Sierra ABI.
    pub fn from_abi(contract: impl Into<String>, abi: &[AbiParam]) -> Result<Self, EncodingError> {
        let params = abi
            .iter()
            .map(|input| {
                let kind = ParamKind::from_cairo_type(&input.ty)
                    .map_err(|err| err.in_param(&input.name))?;
                Ok(Param {
                    name: input.name.clone(),
                    kind,
                })
            })
            .collect::<Result<_, EncodingError>>()?;
        Ok(Self {
            contract: contract.into(),
            params,
        })
    }

    pub fn contract(&self) -> &str {
        &self.contract
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }

    /// Canonical signature, e.g. `constructor(owner: ContractAddress, price: u256)`.
    pub fn signature(&self) -> String {
        let params: Vec<_> = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.kind))
            .collect();
        format!("constructor({})", params.join(", "))
    }

    /// Keccak-256 of the canonical signature.
    pub fn interface_hash(&self) -> InterfaceHash {
        let mut keccak = Keccak::v256();
        keccak.update(self.signature().as_bytes());
        let mut hash = InterfaceHash::default();
        keccak.finalize(&mut hash);
        hash
    }

    pub fn interface_hash_hex(&self) -> String {
        format!("0x{}", hex::encode(self.interface_hash()))
    }

    /// Fails unless the signature hashes to `expected`.
    pub fn ensure_interface(&self, expected: &str) -> Result<(), EncodingError> {
        let actual = self.interface_hash_hex();
        let normalized = expected.trim().to_ascii_lowercase();
        let normalized = normalized.strip_prefix("0x").unwrap_or(&normalized);
        if normalized == &actual[2..] {
            Ok(())
        } else {
            Err(EncodingError::InterfaceMismatch {
                expected: expected.to_string(),
                actual,
            })
        }
    }

    /// Fails unless every parameter lines up, by name and type, with the ABI constructor.
    pub fn ensure_matches_abi(&self, abi: &[AbiParam]) -> Result<(), EncodingError> {
        for (position, (param, input)) in self.params.iter().zip(abi).enumerate() {
            let kind = ParamKind::from_cairo_type(&input.ty).map_err(|_| {
                EncodingError::AbiMismatch {
                    position,
                    reason: format!("unsupported ABI type `{}`", input.ty),
                }
            })?;
            if param.name != input.name || param.kind != kind {
                return Err(EncodingError::AbiMismatch {
                    position,
                    reason: format!(
                        "expected `{}: {}`, ABI has `{}: {}`",
                        param.name, param.kind, input.name, kind
                    ),
                });
            }
        }
        if self.params.len() != abi.len() {
            return Err(EncodingError::AbiMismatch {
                position: self.params.len().min(abi.len()),
                reason: format!(
                    "spec has {} parameters, ABI has {}",
                    self.params.len(),
                    abi.len()
                ),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ConstructorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.contract, self.signature())
    }
}
