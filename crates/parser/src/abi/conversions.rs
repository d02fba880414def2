//! Conversions from the raw JSON shapes to the normalized ABI entries.
//!
//! Pre 0.4.16 compilers describe mutability with `constant` and `payable`
//! booleans. When `stateMutability` is present it always wins.
use serde::Deserialize;

use super::entry::{AbiConstructor, AbiFallback, AbiFunction, AbiParameter, StateMutability};

#[derive(Debug, Deserialize)]
pub(crate) struct RawFunction {
    #[serde(default)]
    name: String,
    #[serde(default)]
    inputs: Vec<AbiParameter>,
    #[serde(default)]
    outputs: Vec<AbiParameter>,
    #[serde(rename = "stateMutability", default)]
    state_mutability: Option<StateMutability>,
    #[serde(default)]
    constant: Option<bool>,
    #[serde(default)]
    payable: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawConstructor {
    #[serde(default)]
    inputs: Vec<AbiParameter>,
    #[serde(rename = "stateMutability", default)]
    state_mutability: Option<StateMutability>,
    #[serde(default)]
    payable: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFallback {
    #[serde(rename = "stateMutability", default)]
    state_mutability: Option<StateMutability>,
    #[serde(default)]
    payable: Option<bool>,
}

fn resolve_mutability(
    state_mutability: Option<StateMutability>,
    constant: Option<bool>,
    payable: Option<bool>,
) -> StateMutability {
    if let Some(m) = state_mutability {
        return m;
    }

    if constant.unwrap_or(false) {
        StateMutability::View
    } else if payable.unwrap_or(false) {
        StateMutability::Payable
    } else {
        StateMutability::Nonpayable
    }
}

impl From<RawFunction> for AbiFunction {
    fn from(value: RawFunction) -> Self {
        Self {
            name: value.name,
            inputs: value.inputs,
            outputs: value.outputs,
            state_mutability: resolve_mutability(
                value.state_mutability,
                value.constant,
                value.payable,
            ),
        }
    }
}

impl From<RawConstructor> for AbiConstructor {
    fn from(value: RawConstructor) -> Self {
        Self {
            inputs: value.inputs,
            state_mutability: resolve_mutability(value.state_mutability, None, value.payable),
        }
    }
}

impl From<RawFallback> for AbiFallback {
    fn from(value: RawFallback) -> Self {
        Self {
            state_mutability: resolve_mutability(value.state_mutability, None, value.payable),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{AbiEntry, StateMutability};

    fn function_mutability(json: &str) -> StateMutability {
        match serde_json::from_str::<AbiEntry>(json).unwrap() {
            AbiEntry::Function(f) => f.state_mutability,
            e => panic!("Expected function, got {:?}", e),
        }
    }

    #[test]
    fn test_state_mutability_wins_over_legacy_flags() {
        assert_eq!(
            function_mutability(
                r#"{"type": "function", "name": "f", "stateMutability": "pure", "constant": false}"#
            ),
            StateMutability::Pure
        );
    }

    #[test]
    fn test_legacy_constant() {
        assert_eq!(
            function_mutability(r#"{"type": "function", "name": "f", "constant": true}"#),
            StateMutability::View
        );
    }

    #[test]
    fn test_legacy_payable() {
        assert_eq!(
            function_mutability(r#"{"type": "function", "name": "f", "payable": true}"#),
            StateMutability::Payable
        );
        assert_eq!(
            function_mutability(r#"{"type": "function", "name": "f"}"#),
            StateMutability::Nonpayable
        );
    }

    #[test]
    fn test_legacy_payable_fallback() {
        let entry: AbiEntry =
            serde_json::from_str(r#"{"type": "fallback", "payable": true}"#).unwrap();

        match entry {
            AbiEntry::Fallback(f) => assert!(f.state_mutability.is_payable()),
            e => panic!("Expected fallback, got {:?}", e),
        }
    }
}
