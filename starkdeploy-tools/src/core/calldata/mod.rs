// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Constructor calldata assembly.

use std::{borrow::Cow, collections::BTreeMap};

use serde::Deserialize;

use crate::core::encoding::{self, ByteArray, EncodingError, FieldElement};

pub use spec::{AbiParam, ConstructorSpec, InterfaceHash, Param, ParamKind};

pub mod spec;

/// Constructor argument values by parameter name, as read from configuration.
pub type ConstructorArgs = BTreeMap<String, ArgValue>;

/// A constructor value as written in TOML.
///
/// Bare TOML integers keep their numeric value: `owner = 0x123` is the integer 291, so it is only
/// accepted where a number is expected. Addresses and felts must be quoted hex strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Text(String),
    Integer(i64),
}

impl ArgValue {
    fn hex(&self) -> Result<FieldElement, EncodingError> {
        match self {
            Self::Text(text) => FieldElement::from_hex(text),
            Self::Integer(n) => Err(EncodingError::InvalidHex(format!(
                "{n} (write hex values as quoted strings)"
            ))),
        }
    }

    fn decimal(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Integer(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

/// Walks a [`ConstructorSpec`] in order, encoding each named value.
#[derive(Debug)]
pub struct CalldataBuilder<'a> {
    spec: &'a ConstructorSpec,
}

impl<'a> CalldataBuilder<'a> {
    pub fn new(spec: &'a ConstructorSpec) -> Self {
        Self { spec }
    }

    /// Builds the flat calldata for `values`.
    ///
    /// Every parameter must have a value and every value must belong to a parameter. The output
    /// depends only on the parameters and the values.
    pub fn build(&self, values: &ConstructorArgs) -> Result<Vec<FieldElement>, EncodingError> {
        if let Some(missing) = self
            .spec
            .params()
            .iter()
            .find(|p| !values.contains_key(&p.name))
        {
            return Err(EncodingError::MissingField(missing.name.clone()));
        }
        if let Some(unknown) = values.keys().find(|name| !self.spec.has_param(name)) {
            return Err(EncodingError::UnknownField(unknown.clone()));
        }

        let mut calldata = Vec::new();
        for param in self.spec.params() {
            let value = &values[&param.name];
            encode_param(param.kind, value, &mut calldata)
                .map_err(|err| err.in_param(&param.name))?;
        }
        Ok(calldata)
    }
}

fn encode_param(
    kind: ParamKind,
    value: &ArgValue,
    out: &mut Vec<FieldElement>,
) -> Result<(), EncodingError> {
    match kind {
        ParamKind::Address | ParamKind::Felt => out.push(value.hex()?),
        ParamKind::ByteArray => match value {
            ArgValue::Text(text) => ByteArray::encode(text)?.write_to(out),
            ArgValue::Integer(n) => return Err(EncodingError::ExpectedString(*n)),
        },
        ParamKind::U256 => {
            let (low, high) = encoding::split_decimal(&value.decimal())?;
            out.extend([low, high]);
        }
        ParamKind::Uint { bits } => {
            let value = value.decimal();
            let int = encoding::parse_u256(&value)?;
            if int.bit_len() > bits as usize {
                return Err(EncodingError::Overflow(format!("{value} does not fit in u{bits}")));
            }
            out.push(FieldElement::from_decimal_string(&value)?);
        }
    }
    Ok(())
}
