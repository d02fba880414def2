//! Solidity interface generation from contract ABIs.
//!
//! ```ignore (pseudo-code)
//! let abi = AbiParser::parse_abi_string(&json)?;
//! let source = abisol_sol::generate(&abi, &GenerateOptions::default())?;
//! ```
use abisol_parser::{AbiEntry, AbiParser};

mod declarations;
pub use declarations::{Declaration, DeclarationCollector, Declarations, Scope};

mod error;
pub use error::{Error, SolResult};

mod expand;
pub use expand::SHARED_STRUCTS_INTERFACE;

mod format;
#[cfg(feature = "prettify")]
pub use format::ForgeFormatter;
pub use format::{default_formatter, SourceFormatter};

mod generator;
pub use generator::{SolGenerator, GENERATOR_NAME, GENERATOR_VERSION};

mod options;
pub use options::{
    GenerateOptions, GenerationMode, ParseGenerationModeError, DEFAULT_INTERFACE_NAME,
    DEFAULT_LICENSE,
};

pub mod version;

/// Generates the Solidity source of `abi`, formatted with the built-in
/// formatter when `options.prettify` is set.
pub fn generate(abi: &[AbiEntry], options: &GenerateOptions) -> SolResult<String> {
    let formatter = if options.prettify {
        default_formatter()
    } else {
        None
    };

    generate_with_formatter(abi, options, formatter.as_deref())
}

/// Same as [`generate`] with a caller provided formatter.
pub fn generate_with_formatter(
    abi: &[AbiEntry],
    options: &GenerateOptions,
    formatter: Option<&dyn SourceFormatter>,
) -> SolResult<String> {
    let formatter = match (options.prettify, formatter) {
        (true, None) => return Err(Error::FormatterUnavailable),
        (true, Some(formatter)) => Some(formatter),
        (false, _) => None,
    };

    let source = SolGenerator::new(abi, options)?.generate()?;

    let Some(formatter) = formatter else {
        return Ok(source);
    };

    match formatter.format(&source) {
        Ok(formatted) => Ok(formatted),
        Err(e) => {
            tracing::warn!("formatting failed, returning unformatted source: {}", e);
            Ok(source)
        }
    }
}

/// Parses `abi_json` (an ABI array or a compiler artifact) and generates
/// its Solidity source.
pub fn generate_from_str(abi_json: &str, options: &GenerateOptions) -> SolResult<String> {
    let abi = AbiParser::parse_abi_string(abi_json)?;
    generate(&abi, options)
}
