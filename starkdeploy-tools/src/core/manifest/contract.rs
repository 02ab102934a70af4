// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{collections::BTreeMap, path::PathBuf};

use serde::Deserialize;

use super::ManifestError;
use crate::core::{
    calldata::{AbiParam, ArgValue, ConstructorArgs, ConstructorSpec},
    contracts,
    encoding::FieldElement,
    network::Network,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlContract {
    /// Built-in constructor spec; derived from the artifact ABI when unset.
    pub spec: Option<String>,
    pub interface_hash: Option<String>,
    pub sierra_path: PathBuf,
    pub casm_path: PathBuf,
    pub salt: Option<FieldElement>,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub args: BTreeMap<String, ArgValue>,
    #[serde(default)]
    pub networks: BTreeMap<Network, BTreeMap<String, ArgValue>>,
}

impl TomlContract {
    /// Shared arguments overlaid with the ones specific to `network`.
    pub fn args_for(&self, network: Network) -> ConstructorArgs {
        let overrides = self.networks.get(&network).into_iter().flatten();
        self.args
            .iter()
            .chain(overrides)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Resolves the constructor spec for the contract keyed `name`.
    pub fn constructor_spec(
        &self,
        name: &str,
        abi: &[AbiParam],
    ) -> Result<ConstructorSpec, ManifestError> {
        match &self.spec {
            Some(spec) => {
                contracts::lookup(spec).ok_or_else(|| ManifestError::UnknownSpec(spec.clone()))
            }
            None => ConstructorSpec::from_abi(name, abi).map_err(|err| ManifestError::InvalidValue {
                key: format!("contracts.{name}.spec"),
                reason: err.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        calldata::{CalldataBuilder, ParamKind},
        encoding::EncodingError,
    };

    fn contract(toml: &str) -> TomlContract {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn network_overrides() {
        let contract = contract(
            r#"
sierra_path = "a.json"
casm_path = "b.json"

[args]
owner = "0x1"
max_supply = 100

[networks.mainnet]
owner = "0x2"
"#,
        );
        let local = contract.args_for(Network::Local);
        assert_eq!(local["owner"], ArgValue::from("0x1"));
        assert_eq!(local["max_supply"], ArgValue::Integer(100));

        let mainnet = contract.args_for(Network::Mainnet);
        assert_eq!(mainnet["owner"], ArgValue::from("0x2"));
        assert_eq!(mainnet.len(), 2);
    }

    #[test]
    fn spec_resolution() {
        let abi = vec![AbiParam {
            name: "owner".to_string(),
            ty: "core::starknet::contract_address::ContractAddress".to_string(),
        }];

        let derived = contract("sierra_path = \"a\"\ncasm_path = \"b\"\n");
        let spec = derived.constructor_spec("thing", &abi).unwrap();
        assert_eq!(spec.params()[0].kind, ParamKind::Address);

        let registry = contract("spec = \"ethrx\"\nsierra_path = \"a\"\ncasm_path = \"b\"\n");
        assert_eq!(
            registry.constructor_spec("thing", &abi).unwrap(),
            contracts::ethrx()
        );

        let unknown = contract("spec = \"erc721\"\nsierra_path = \"a\"\ncasm_path = \"b\"\n");
        assert!(matches!(
            unknown.constructor_spec("thing", &abi),
            Err(ManifestError::UnknownSpec(_))
        ));
    }

    #[test]
    fn unquoted_hex_address() {
        let abi = vec![AbiParam {
            name: "owner".to_string(),
            ty: "core::starknet::contract_address::ContractAddress".to_string(),
        }];
        let unquoted = contract(
            r#"
sierra_path = "a.json"
casm_path = "b.json"

[args]
owner = 0x123
"#,
        );
        assert_eq!(unquoted.args_for(Network::Local)["owner"], ArgValue::Integer(0x123));

        let spec = unquoted.constructor_spec("thing", &abi).unwrap();
        match CalldataBuilder::new(&spec)
            .build(&unquoted.args_for(Network::Local))
            .unwrap_err()
        {
            EncodingError::Param { param, source } => {
                assert_eq!(param, "owner");
                assert!(matches!(*source, EncodingError::InvalidHex(_)));
            }
            err => panic!("unexpected error: {err}"),
        }

        let quoted = contract(
            r#"
sierra_path = "a.json"
casm_path = "b.json"
args = { owner = "0x123" }
"#,
        );
        let calldata = CalldataBuilder::new(&spec)
            .build(&quoted.args_for(Network::Local))
            .unwrap();
        assert_eq!(calldata, vec![FieldElement::from_u64(0x123)]);
    }
}
