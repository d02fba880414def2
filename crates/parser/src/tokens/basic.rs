use crate::{AbiResult, Error};

/// The type of a value once all array dimensions are stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// A struct, described by the `components` of the parameter.
    Tuple,
    /// An external function reference (`address` + selector).
    Function,
    /// Dynamic `bytes`.
    Bytes,
    String,
    /// Any other value type (`uint256`, `address`, `bytes32`...), kept verbatim.
    Elementary(String),
}

impl BaseType {
    pub fn parse(type_path: &str) -> AbiResult<Self> {
        match type_path {
            "tuple" => Ok(BaseType::Tuple),
            "function" => Ok(BaseType::Function),
            "bytes" => Ok(BaseType::Bytes),
            "string" => Ok(BaseType::String),
            _ => {
                let valid = type_path
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic())
                    && type_path.chars().all(|c| c.is_ascii_alphanumeric());

                if !valid {
                    return Err(Error::TokenInitFailed(format!(
                        "Invalid base type `{}`",
                        type_path
                    )));
                }

                Ok(BaseType::Elementary(type_path.to_string()))
            }
        }
    }

    /// Dynamically sized types, which need a data location in function signatures.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, BaseType::Tuple | BaseType::Bytes | BaseType::String)
    }
}
