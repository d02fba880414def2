//! # Generation options.
use serde::{Deserialize, Serialize};

use crate::version::DEFAULT_SOLIDITY_VERSION;

pub const DEFAULT_INTERFACE_NAME: &str = "MyInterface";
pub const DEFAULT_LICENSE: &str = "UNLICENSED";

/// The shape of the generated source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// A standalone file, with license, pragmas and the echoed ABI.
    #[default]
    Normal,
    /// Only the interface and its declarations, to be pasted into an existing file.
    Embedded,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseGenerationModeError {
    invalid_value: String,
}

impl std::fmt::Display for ParseGenerationModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid generation mode '{}'. Supported values are 'normal' or 'embedded'.",
            self.invalid_value
        )
    }
}

impl std::error::Error for ParseGenerationModeError {}

impl std::str::FromStr for GenerationMode {
    type Err = ParseGenerationModeError;

    fn from_str(input: &str) -> Result<GenerationMode, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "normal" => Ok(GenerationMode::Normal),
            "embedded" => Ok(GenerationMode::Embedded),
            _ => Err(ParseGenerationModeError {
                invalid_value: input.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Name of the generated interface.
    pub name: String,
    /// Solidity version range, as written in `pragma solidity`.
    pub solidity_version: String,
    /// SPDX license identifier.
    pub license: String,
    pub mode: GenerationMode,
    /// Adds a comment stating the file was generated.
    pub output_attribution: bool,
    /// Echoes the input ABI in a comment at the end of a standalone file.
    pub output_source: bool,
    /// Runs the generated source through a formatter.
    pub prettify: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_INTERFACE_NAME.to_string(),
            solidity_version: DEFAULT_SOLIDITY_VERSION.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            mode: GenerationMode::Normal,
            output_attribution: true,
            output_source: true,
            prettify: false,
        }
    }
}
