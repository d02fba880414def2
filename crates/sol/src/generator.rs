//! Generation of a complete Solidity source from an ABI.
//!
//! Features of the version range, features of the ABI and struct
//! declarations are all resolved when the generator is built. Expansion
//! itself is a single pass over the ABI entries.
use abisol_parser::{AbiEntry, AbiFeatures};

use crate::declarations::Declarations;
use crate::error::SolResult;
use crate::expand::{ExpandContext, SolInterface};
use crate::options::{GenerateOptions, GenerationMode};
use crate::version::{AbiEncoderMode, Feature, FeatureMatrix, VersionRange};

pub const GENERATOR_NAME: &str = "abisol";
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

const ABIENCODER_V2_PRAGMA: &str = "pragma experimental ABIEncoderV2;";

#[derive(Debug)]
pub struct SolGenerator<'a> {
    abi: &'a [AbiEntry],
    options: &'a GenerateOptions,
    features: FeatureMatrix,
    abi_features: AbiFeatures,
    declarations: Declarations,
}

impl<'a> SolGenerator<'a> {
    pub fn new(abi: &'a [AbiEntry], options: &'a GenerateOptions) -> SolResult<Self> {
        let range = VersionRange::parse(&options.solidity_version)?;
        let features = FeatureMatrix::for_range(&range)?;
        let abi_features = AbiFeatures::collect(abi)?;
        let declarations = Declarations::collect(abi, &options.name)?;

        tracing::trace!(
            "generating `{}` for `{}`: {} entries, {} struct(s), {:?}",
            options.name,
            range,
            abi.len(),
            declarations.len(),
            abi_features
        );

        Ok(Self {
            abi,
            options,
            features,
            abi_features,
            declarations,
        })
    }

    /// Consumes the generator, a new one is needed for another run.
    pub fn generate(self) -> SolResult<String> {
        if !self.declarations.is_empty() {
            self.features.require_enabled(Feature::StructsInInterfaces)?;
        }

        if self.abi_features.defines_errors {
            self.features.require_enabled(Feature::CustomErrors)?;
        }

        let ctx = ExpandContext {
            features: &self.features,
            abi_features: &self.abi_features,
            declarations: &self.declarations,
            interface_name: &self.options.name,
        };

        let mut blocks = vec![];

        if let Some(header) = self.expand_header() {
            blocks.push(header);
        }

        blocks.push(SolInterface::expand(self.abi, &ctx)?);

        if let Some(shared) = SolInterface::expand_shared(&ctx)? {
            blocks.push(shared);
        }

        blocks.extend(SolInterface::expand_containers(&ctx)?);

        if let Some(footer) = self.expand_footer()? {
            blocks.push(footer);
        }

        Ok(blocks.join("\n"))
    }

    /// The ABI uses types which need ABI coder v2, and some compilers of
    /// the range don't enable it by default.
    fn needs_abiencoder_v2_pragma(&self) -> bool {
        self.abi_features.needs_abiencoder_v2
            && self.features.abi_encoder().concrete() != Some(&AbiEncoderMode::Default)
    }

    fn expand_header(&self) -> Option<String> {
        let attribution = if self.options.mode == GenerationMode::Normal && self.options.output_source {
            format!(
                "// !! THIS FILE WAS AUTOGENERATED BY {} v{}. SEE SOURCE BELOW. !!",
                GENERATOR_NAME, GENERATOR_VERSION
            )
        } else if self.options.mode == GenerationMode::Normal {
            format!(
                "// !! THIS FILE WAS AUTOGENERATED BY {} v{}. !!",
                GENERATOR_NAME, GENERATOR_VERSION
            )
        } else {
            format!(
                "// !! THIS INTERFACE WAS AUTOGENERATED BY {} v{}. !!",
                GENERATOR_NAME, GENERATOR_VERSION
            )
        };

        let mut lines = vec![];

        match self.options.mode {
            GenerationMode::Normal => {
                lines.push(format!("// SPDX-License-Identifier: {}", self.options.license));

                if self.options.output_attribution {
                    lines.push(attribution);
                }

                lines.push(format!("pragma solidity {};", self.features.range().pragma()));

                if self.needs_abiencoder_v2_pragma() {
                    lines.push(ABIENCODER_V2_PRAGMA.to_string());
                }
            }
            GenerationMode::Embedded => {
                if self.options.output_attribution {
                    lines.push(attribution);
                }
            }
        }

        if lines.is_empty() {
            return None;
        }

        let mut header = lines.join("\n");
        header.push('\n');
        Some(header)
    }

    fn expand_footer(&self) -> SolResult<Option<String>> {
        match self.options.mode {
            GenerationMode::Normal if self.options.output_source => {
                // The ABI must not end the comment it is embedded in.
                let abi = serde_json::to_string_pretty(self.abi)?.replace("*/", "*\\/");

                Ok(Some(format!(
                    "// THIS FILE WAS AUTOGENERATED FROM THE FOLLOWING ABI JSON:\n/*\n{}\n*/\n",
                    abi
                )))
            }
            GenerationMode::Normal => Ok(None),
            GenerationMode::Embedded if self.needs_abiencoder_v2_pragma() => Ok(Some(format!(
                "// NOTE: the including file must enable ABI coder v2 (`{}`).\n",
                ABIENCODER_V2_PRAGMA
            ))),
            GenerationMode::Embedded => Ok(None),
        }
    }
}
