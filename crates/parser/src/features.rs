//! Coarse properties of an ABI, gathered in a single pass.
use crate::tokens::BaseType;
use crate::{AbiEntry, AbiParameter, AbiResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbiFeatures {
    /// The ABI declares an explicit `receive` entry.
    pub defines_receive: bool,
    /// The ABI declares an explicit `fallback` entry.
    pub defines_fallback: bool,
    /// The ABI declares at least one custom error.
    pub defines_errors: bool,
    /// Some parameter can only be expressed with ABI coder v2: structs,
    /// nested arrays or arrays of dynamic types.
    pub needs_abiencoder_v2: bool,
}

impl AbiFeatures {
    pub fn collect(entries: &[AbiEntry]) -> AbiResult<Self> {
        let mut features = Self::default();

        for entry in entries {
            match entry {
                AbiEntry::Receive(_) => features.defines_receive = true,
                AbiEntry::Fallback(_) => features.defines_fallback = true,
                AbiEntry::Error(_) => features.defines_errors = true,
                AbiEntry::Function(_) | AbiEntry::Constructor(_) | AbiEntry::Event(_) => (),
            }

            for param in entry.parameters() {
                if Self::needs_abiencoder_v2(param)? {
                    features.needs_abiencoder_v2 = true;
                }
            }
        }

        tracing::trace!("ABI features: {:?}", features);

        Ok(features)
    }

    fn needs_abiencoder_v2(param: &AbiParameter) -> AbiResult<bool> {
        let abi_type = param.abi_type()?;

        if abi_type.is_tuple() || abi_type.is_nested_array() {
            return Ok(true);
        }

        if abi_type.is_array() && matches!(abi_type.base, BaseType::String | BaseType::Bytes) {
            return Ok(true);
        }

        for c in param.components() {
            if Self::needs_abiencoder_v2(c)? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
