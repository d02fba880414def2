use serde_json::Value;

use crate::abi::entry::AbiEntry;
use crate::{AbiResult, Error};

pub struct AbiParser {}

impl AbiParser {
    /// Parses an ABI string to output a `Vec<AbiEntry>`.
    ///
    /// The `abi` can have two formats:
    /// 1. A compilation artifact (Truffle, Hardhat, Foundry...) with an `abi` key.
    ///    The value of `abi` may itself be a JSON encoded string.
    /// 2. The ABI itself, which is an array of [`AbiEntry`].
    ///
    /// # Arguments
    ///
    /// * `abi` - A string representing the ABI.
    pub fn parse_abi_string(abi: &str) -> AbiResult<Vec<AbiEntry>> {
        let value: Value = serde_json::from_str(abi)?;
        Self::parse_abi_value(value)
    }

    /// Same as [`AbiParser::parse_abi_string`], from an already parsed JSON value.
    pub fn parse_abi_value(value: Value) -> AbiResult<Vec<AbiEntry>> {
        let entries = match value {
            Value::Array(entries) => entries,
            Value::Object(mut artifact) => match artifact.remove("abi") {
                Some(Value::Array(entries)) => entries,
                Some(Value::String(encoded)) => return Self::parse_abi_string(&encoded),
                Some(other) => {
                    return Err(Error::ParsingFailed(format!(
                        "Artifact `abi` key is expected to be an array, got `{}`",
                        other
                    )))
                }
                None => {
                    return Err(Error::ParsingFailed(
                        "JSON object has no `abi` key".to_string(),
                    ))
                }
            },
            other => {
                return Err(Error::ParsingFailed(format!(
                    "ABI is expected to be an array or an artifact object, got `{}`",
                    other
                )))
            }
        };

        entries.into_iter().map(Self::parse_entry).collect()
    }

    /// Parses one entry, defaulting to a function when the `type` key is
    /// missing as legacy compilers did.
    fn parse_entry(mut entry: Value) -> AbiResult<AbiEntry> {
        if let Value::Object(ref mut obj) = entry {
            obj.entry("type")
                .or_insert_with(|| Value::String("function".to_string()));
        }

        let parsed = serde_json::from_value::<AbiEntry>(entry)?;
        tracing::trace!("parsed ABI entry {:?} ({})", parsed.name(), parsed.kind());

        Ok(parsed)
    }
}
