use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Token initialization error: {0}")]
    TokenInitFailed(String),
    #[error("Parser error: {0}")]
    ParsingFailed(String),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type AbiResult<T, E = Error> = Result<T, E>;
