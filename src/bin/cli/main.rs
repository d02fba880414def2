use std::fs;
use std::io::Write;

use abisol_sol::GenerateOptions;
use camino::Utf8Path;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

mod args;
mod contract;
mod error;

use args::AbisolArgs;
use contract::{ContractData, ContractParser};
use error::{AbisolCliResult, Error};

/// Extension of the generated files.
const SOL_EXTENSION: &str = "sol";

fn main() -> AbisolCliResult<()> {
    init_logging()?;

    let args = AbisolArgs::parse();
    tracing::trace!("args: {:?}", args);

    if let Some(shell) = args.completions {
        clap_complete::generate(
            shell,
            &mut AbisolArgs::command(),
            "abisol",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let options = args.generate_options()?;

    match args.path.as_deref() {
        Some(path) if path.is_dir() => {
            let Some(output_dir) = args.output_dir.as_deref() else {
                return Err(Error::Other(
                    "--output-dir is required when PATH is a directory".to_string(),
                ));
            };

            let contracts = ContractParser::from_artifacts_path(path)?;
            fs::create_dir_all(output_dir)?;

            for contract in &contracts {
                let source = generate(contract, &options)?;
                let out_path = output_dir.join(format!("{}.{}", contract.name, SOL_EXTENSION));

                tracing::info!("writing {}", out_path);
                fs::write(&out_path, source)?;
            }
        }
        path => {
            if args.output_dir.is_some() {
                return Err(Error::Other(
                    "--output-dir requires PATH to be a directory".to_string(),
                ));
            }

            let contract = match path {
                Some(path) if path.as_str() != "-" => ContractParser::from_file(path, &options.name)?,
                _ => ContractParser::from_reader(std::io::stdin().lock(), &options.name)?,
            };

            let source = generate(&contract, &options)?;
            write_output(args.output.as_deref(), &source)?;
        }
    }

    Ok(())
}

fn generate(contract: &ContractData, options: &GenerateOptions) -> AbisolCliResult<String> {
    let options = GenerateOptions {
        name: contract.name.clone(),
        ..options.clone()
    };

    tracing::trace!("generating {} from {:?}", options.name, contract.origin);

    Ok(abisol_sol::generate(&contract.abi, &options)?)
}

fn write_output(output: Option<&Utf8Path>, source: &str) -> AbisolCliResult<()> {
    match output {
        Some(path) => {
            tracing::info!("writing {}", path);
            fs::write(path, source)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(source.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

pub fn init_logging() -> AbisolCliResult<()> {
    const DEFAULT_LOG_FILTER: &str = "info,abisol=trace";

    // stdout only carries the generated source.
    let builder = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or(EnvFilter::try_new(DEFAULT_LOG_FILTER))
                .map_err(|e| Error::Other(format!("Tracing error: {:?}", e)))?,
        );

    tracing::subscriber::set_global_default(builder.finish())
        .map_err(|e| Error::Other(format!("Tracing error: {:?}", e)))
}
