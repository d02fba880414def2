//! abisol CLI arguments.
//!
use std::fs;

use abisol_sol::{GenerateOptions, GenerationMode};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use clap_complete::Shell;

use crate::error::AbisolCliResult;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct AbisolArgs {
    #[arg(value_name = "PATH")]
    #[arg(
        help = "ABI or compiler artifact JSON file, or a directory containing them. Reads stdin when omitted or `-`."
    )]
    pub path: Option<Utf8PathBuf>,

    #[arg(long, short)]
    #[arg(value_name = "NAME")]
    #[arg(help = "Name of the generated interface.")]
    pub name: Option<String>,

    #[arg(long)]
    #[arg(value_name = "RANGE")]
    #[arg(help = "Solidity version range of the generated source, like \">=0.7.0 <0.9.0\".")]
    pub solidity_version: Option<String>,

    #[arg(long)]
    #[arg(value_name = "SPDX")]
    #[arg(help = "SPDX license identifier of the generated source.")]
    pub license: Option<String>,

    #[arg(long)]
    #[arg(value_name = "MODE")]
    #[arg(help = "`normal` for a standalone file, `embedded` for an interface to paste into an existing file.")]
    pub mode: Option<GenerationMode>,

    #[arg(long)]
    #[arg(help = "Don't add the autogenerated notice.")]
    pub no_attribution: bool,

    #[arg(long)]
    #[arg(help = "Don't echo the ABI at the end of the generated file.")]
    pub no_source: bool,

    #[arg(long)]
    #[arg(help = "Format the generated source.")]
    pub prettify: bool,

    #[arg(long)]
    #[arg(value_name = "PATH")]
    #[arg(help = "Path of a JSON file defining generation options. Flags take precedence.")]
    pub config: Option<Utf8PathBuf>,

    #[arg(long, short)]
    #[arg(value_name = "FILE")]
    #[arg(conflicts_with = "output_dir")]
    #[arg(help = "File where the generated source is written, stdout if omitted.")]
    pub output: Option<Utf8PathBuf>,

    #[arg(long)]
    #[arg(value_name = "OUTPUT_DIR")]
    #[arg(help = "Directory where one `.sol` file per ABI is written, when PATH is a directory.")]
    pub output_dir: Option<Utf8PathBuf>,

    #[arg(long)]
    #[arg(value_name = "SHELL")]
    #[arg(exclusive = true)]
    #[arg(help = "Print shell completions and exit.")]
    pub completions: Option<Shell>,
}

impl AbisolArgs {
    /// Options from the configuration file, if any, overridden by flags.
    pub fn generate_options(&self) -> AbisolCliResult<GenerateOptions> {
        let mut options = match &self.config {
            Some(path) => load_config(path)?,
            None => GenerateOptions::default(),
        };

        if let Some(name) = &self.name {
            options.name = name.clone();
        }

        if let Some(solidity_version) = &self.solidity_version {
            options.solidity_version = solidity_version.clone();
        }

        if let Some(license) = &self.license {
            options.license = license.clone();
        }

        if let Some(mode) = self.mode {
            options.mode = mode;
        }

        if self.no_attribution {
            options.output_attribution = false;
        }

        if self.no_source {
            options.output_source = false;
        }

        if self.prettify {
            options.prettify = true;
        }

        Ok(options)
    }
}

fn load_config(path: &Utf8Path) -> AbisolCliResult<GenerateOptions> {
    tracing::trace!("loading configuration from {}", path);
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = AbisolArgs::try_parse_from(["abisol", "abi.json"]).unwrap();
        assert_eq!(args.path, Some(Utf8PathBuf::from("abi.json")));
        assert_eq!(args.generate_options().unwrap(), GenerateOptions::default());
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("abisol.json");
        fs::write(
            &config,
            r#"{ "name": "IFromConfig", "license": "MIT", "outputSource": false, "mode": "embedded" }"#,
        )
        .unwrap();

        let args = AbisolArgs::try_parse_from([
            "abisol",
            "--config",
            config.to_str().unwrap(),
            "--name",
            "IFromFlag",
            "--solidity-version",
            "^0.8.4",
            "--mode",
            "normal",
            "--no-attribution",
        ])
        .unwrap();

        let options = args.generate_options().unwrap();
        assert_eq!(options.name, "IFromFlag");
        assert_eq!(options.license, "MIT");
        assert_eq!(options.solidity_version, "^0.8.4");
        assert_eq!(options.mode, GenerationMode::Normal);
        assert!(!options.output_source);
        assert!(!options.output_attribution);
    }

    #[test]
    fn test_invalid_mode() {
        assert!(AbisolArgs::try_parse_from(["abisol", "--mode", "inline"]).is_err());
    }

    #[test]
    fn test_output_conflicts() {
        assert!(
            AbisolArgs::try_parse_from(["abisol", "abis", "-o", "a.sol", "--output-dir", "out"])
                .is_err()
        );
    }
}
