mod error;
pub use error::{AbiResult, Error};

mod abi;
pub use crate::abi::entry::{
    AbiConstructor, AbiEntry, AbiError, AbiEvent, AbiFallback, AbiFunction, AbiParameter,
    AbiReceive, StateMutability,
};
pub use crate::abi::parser::AbiParser;

mod features;
pub use features::AbiFeatures;

pub mod tokens;
