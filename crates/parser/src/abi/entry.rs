//! Solidity JSON ABI entries.
//!
//! The model follows the JSON emitted by `solc --abi`: every entry is tagged
//! by its `type` key, and parameters may nest `components` for tuple types.
//!
//! Older compilers emitted `constant`/`payable` flags instead of
//! `stateMutability`; these entries are normalized at deserialization time
//! (see `conversions.rs`), so the rest of the workspace only ever sees a
//! [`StateMutability`].
use serde::{Deserialize, Serialize};

use super::conversions::{RawConstructor, RawFallback, RawFunction};
use crate::tokens::AbiType;
use crate::AbiResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    #[default]
    Nonpayable,
    Payable,
}

impl StateMutability {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateMutability::Pure => "pure",
            StateMutability::View => "view",
            StateMutability::Nonpayable => "nonpayable",
            StateMutability::Payable => "payable",
        }
    }

    pub fn is_payable(&self) -> bool {
        *self == StateMutability::Payable
    }
}

impl std::fmt::Display for StateMutability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function input/output, an event or error input, or a tuple component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<AbiParameter>>,
    #[serde(
        rename = "internalType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    /// Explicit structural signature of a tuple, overriding the one derived
    /// from `components`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl AbiParameter {
    pub fn new(name: &str, r#type: &str) -> Self {
        Self {
            name: name.to_string(),
            r#type: r#type.to_string(),
            ..Default::default()
        }
    }

    pub fn tuple(name: &str, r#type: &str, components: Vec<AbiParameter>) -> Self {
        Self {
            name: name.to_string(),
            r#type: r#type.to_string(),
            components: Some(components),
            ..Default::default()
        }
    }

    pub fn with_internal_type(mut self, internal_type: &str) -> Self {
        self.internal_type = Some(internal_type.to_string());
        self
    }

    pub fn indexed(mut self) -> Self {
        self.indexed = Some(true);
        self
    }

    pub fn components(&self) -> &[AbiParameter] {
        self.components.as_deref().unwrap_or_default()
    }

    pub fn is_indexed(&self) -> bool {
        self.indexed.unwrap_or(false)
    }

    pub fn abi_type(&self) -> AbiResult<AbiType> {
        AbiType::parse(&self.r#type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFunction")]
pub struct AbiFunction {
    pub name: String,
    pub inputs: Vec<AbiParameter>,
    pub outputs: Vec<AbiParameter>,
    #[serde(rename = "stateMutability")]
    pub state_mutability: StateMutability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawConstructor")]
pub struct AbiConstructor {
    pub inputs: Vec<AbiParameter>,
    #[serde(rename = "stateMutability")]
    pub state_mutability: StateMutability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFallback")]
pub struct AbiFallback {
    #[serde(rename = "stateMutability")]
    pub state_mutability: StateMutability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiReceive {
    #[serde(rename = "stateMutability", default = "payable")]
    pub state_mutability: StateMutability,
}

impl Default for AbiReceive {
    fn default() -> Self {
        Self {
            state_mutability: payable(),
        }
    }
}

fn payable() -> StateMutability {
    StateMutability::Payable
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEvent {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParameter>,
    #[serde(default)]
    pub anonymous: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiError {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AbiEntry {
    Function(AbiFunction),
    Constructor(AbiConstructor),
    Fallback(AbiFallback),
    Receive(AbiReceive),
    Event(AbiEvent),
    Error(AbiError),
}

impl AbiEntry {
    pub fn kind(&self) -> &'static str {
        match self {
            AbiEntry::Function(_) => "function",
            AbiEntry::Constructor(_) => "constructor",
            AbiEntry::Fallback(_) => "fallback",
            AbiEntry::Receive(_) => "receive",
            AbiEntry::Event(_) => "event",
            AbiEntry::Error(_) => "error",
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            AbiEntry::Function(f) => Some(&f.name),
            AbiEntry::Event(e) => Some(&e.name),
            AbiEntry::Error(e) => Some(&e.name),
            AbiEntry::Constructor(_) | AbiEntry::Fallback(_) | AbiEntry::Receive(_) => None,
        }
    }

    /// All the top level parameters of the entry, inputs first.
    pub fn parameters(&self) -> impl Iterator<Item = &AbiParameter> {
        let (inputs, outputs) = match self {
            AbiEntry::Function(f) => (f.inputs.as_slice(), f.outputs.as_slice()),
            AbiEntry::Constructor(c) => (c.inputs.as_slice(), &[][..]),
            AbiEntry::Event(e) => (e.inputs.as_slice(), &[][..]),
            AbiEntry::Error(e) => (e.inputs.as_slice(), &[][..]),
            AbiEntry::Fallback(_) | AbiEntry::Receive(_) => (&[][..], &[][..]),
        };

        inputs.iter().chain(outputs.iter())
    }
}
