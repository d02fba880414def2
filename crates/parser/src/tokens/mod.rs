//! Solidity ABI type tokens.
//!
//! A type path from the ABI (`uint256`, `tuple[][2]`, `function`...) is
//! split into a [`BaseType`] and its array dimensions. Struct shapes are
//! identified by their [`Signature`], and the compiler provided
//! `internalType` is parsed into an [`InternalType`] hint.

mod array;
mod basic;
mod internal_type;
mod signature;

pub use array::{parse_dimensions, ArrayDimension};
pub use basic::BaseType;
pub use internal_type::InternalType;
pub use signature::Signature;

use crate::AbiResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbiType {
    pub type_path: String,
    pub base: BaseType,
    pub dimensions: Vec<ArrayDimension>,
}

impl AbiType {
    pub fn parse(type_path: &str) -> AbiResult<Self> {
        let type_path = type_path.trim();

        let (base, suffix) = match type_path.find('[') {
            Some(idx) => type_path.split_at(idx),
            None => (type_path, ""),
        };

        Ok(Self {
            type_path: type_path.to_string(),
            base: BaseType::parse(base)?,
            dimensions: parse_dimensions(suffix, type_path)?,
        })
    }

    pub fn is_tuple(&self) -> bool {
        self.base == BaseType::Tuple
    }

    pub fn is_array(&self) -> bool {
        !self.dimensions.is_empty()
    }

    pub fn is_nested_array(&self) -> bool {
        self.dimensions.len() > 1
    }

    /// Whether the type needs a data location when used as a function parameter.
    pub fn requires_location(&self) -> bool {
        self.is_array() || self.base.is_dynamic()
    }

    /// The array suffix of the type, like `[][2]`. Empty for non array types.
    pub fn array_suffix(&self) -> String {
        self.dimensions.iter().map(|d| d.to_string()).collect()
    }
}
