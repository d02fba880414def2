use abisol_parser::Error as ParserError;
use thiserror::Error;

use crate::version::Feature;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error("Invalid version range `{range}`: {reason}")]
    InvalidVersionRange { range: String, reason: String },
    #[error("No released Solidity version satisfies `{0}`")]
    UnsatisfiableVersionRange(String),
    #[error("Desired Solidity range `{range}` lacks unambiguous support for `{feature}`")]
    AmbiguousFeature { range: String, feature: Feature },
    #[error("Desired Solidity range `{range}` does not support `{feature}`")]
    UnsupportedFeature { range: String, feature: Feature },
    #[error("No declaration found for struct `{0}`")]
    UndeclaredStruct(String),
    #[error("Output formatting was requested but no formatter is available")]
    FormatterUnavailable,
    #[error("Formatting error: {0}")]
    FormatFailed(String),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type SolResult<T, E = Error> = Result<T, E>;
