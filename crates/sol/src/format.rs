//! Optional formatting of the generated source.
use crate::error::SolResult;

/// Reformats generated Solidity source.
pub trait SourceFormatter {
    fn format(&self, source: &str) -> SolResult<String>;
}

/// The built-in formatter, if the crate was built with it.
#[cfg(feature = "prettify")]
pub fn default_formatter() -> Option<Box<dyn SourceFormatter>> {
    Some(Box::new(ForgeFormatter))
}

#[cfg(not(feature = "prettify"))]
pub fn default_formatter() -> Option<Box<dyn SourceFormatter>> {
    None
}

#[cfg(feature = "prettify")]
pub use forge::ForgeFormatter;

#[cfg(feature = "prettify")]
mod forge {
    use super::SourceFormatter;
    use crate::error::{Error, SolResult};

    /// Formats with `forge fmt` default settings.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ForgeFormatter;

    impl SourceFormatter for ForgeFormatter {
        fn format(&self, source: &str) -> SolResult<String> {
            forge_fmt::fmt(source).map_err(|e| Error::FormatFailed(e.to_string()))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_reindent() {
            let source = "interface I {\nfunction f() external;\n}\n";
            let formatted = ForgeFormatter.format(source).unwrap();

            assert!(formatted.contains("\n    function f() external;\n"));
        }

        #[test]
        fn test_invalid_source() {
            assert!(matches!(
                ForgeFormatter.format("interface I {\n"),
                Err(Error::FormatFailed(_))
            ));
        }
    }
}
