// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Built-in constructor specs.

use crate::core::calldata::{ConstructorSpec, ParamKind};

/// Names accepted by [`lookup`].
pub const KNOWN: &[&str] = &["ethrx"];

pub fn lookup(name: &str) -> Option<ConstructorSpec> {
    match name.to_ascii_lowercase().as_str() {
        "ethrx" => Some(ethrx()),
        _ => None,
    }
}

/// The Etheracts NFT collection.
pub fn ethrx() -> ConstructorSpec {
    ConstructorSpec::new(
        "Ethrx",
        [
            ("owner", ParamKind::Address),
            ("name", ParamKind::ByteArray),
            ("symbol", ParamKind::ByteArray),
            ("base_uri", ParamKind::ByteArray),
            ("contract_uri", ParamKind::ByteArray),
            ("mint_token", ParamKind::Address),
            ("mint_price", ParamKind::U256),
            ("max_supply", ParamKind::U256),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        calldata::{ArgValue, CalldataBuilder, ConstructorArgs},
        encoding::{ByteArray, FieldElement},
    };

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("Ethrx"), Some(ethrx()));
        assert_eq!(lookup("erc20"), None);
    }

    #[test]
    fn ethrx_layout() {
        let values: ConstructorArgs = [
            ("owner", "0x1"),
            ("name", "Etheracts"),
            ("symbol", "Ethrx"),
            ("base_uri", "http://novemberfork.io/etheracts/URI/"),
            ("contract_uri", "https://novemberfork.io/etheracts/URI/contract"),
            ("mint_token", "0x2"),
            ("mint_price", "1000000000000000000"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), ArgValue::from(v)))
        .chain([("max_supply".to_string(), ArgValue::Integer(10000))])
        .collect();

        let spec = ethrx();
        let calldata = CalldataBuilder::new(&spec).build(&values).unwrap();

        let mut expected = vec![FieldElement::from_u64(1)];
        for text in [
            "Etheracts",
            "Ethrx",
            "http://novemberfork.io/etheracts/URI/",
            "https://novemberfork.io/etheracts/URI/contract",
        ] {
            ByteArray::encode(text).unwrap().write_to(&mut expected);
        }
        expected.extend([
            FieldElement::from_u64(2),
            FieldElement::from_u64(1_000_000_000_000_000_000),
            FieldElement::ZERO,
            FieldElement::from_u64(10_000),
            FieldElement::ZERO,
        ]);

        assert_eq!(calldata, expected);
        // 1 + (3 + 3 + 4 + 4) + 1 + 2 + 2
        assert_eq!(calldata.len(), 20);
    }
}
