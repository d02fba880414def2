use abisol_parser::Error as ParserError;
use abisol_sol::Error as SolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error(transparent)]
    Sol(#[from] SolError),
    #[error("An error occurred: {0}")]
    Other(String),
}

pub type AbisolCliResult<T, E = Error> = Result<T, E>;
