use std::fs;
use std::io::Read;

use abisol_parser::{AbiEntry, AbiParser};
use camino::{Utf8Path, Utf8PathBuf};
use convert_case::{Case, Casing};

use crate::error::{AbisolCliResult, Error};

/// Extension of the files loaded from a directory.
pub const ABI_EXTENSION: &str = "json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractOrigin {
    /// ABI loaded from a local ABI or artifact file.
    File(Utf8PathBuf),
    Stdin,
}

#[derive(Debug)]
pub struct ContractData {
    /// Name of the generated interface.
    pub name: String,
    pub origin: ContractOrigin,
    pub abi: Vec<AbiEntry>,
}

pub struct ContractParser {}

impl ContractParser {
    pub fn from_file(path: &Utf8Path, name: &str) -> AbisolCliResult<ContractData> {
        let content = fs::read_to_string(path)?;

        Ok(ContractData {
            name: name.to_string(),
            origin: ContractOrigin::File(path.to_path_buf()),
            abi: AbiParser::parse_abi_string(&content)?,
        })
    }

    pub fn from_reader<R: Read>(mut reader: R, name: &str) -> AbisolCliResult<ContractData> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        Ok(ContractData {
            name: name.to_string(),
            origin: ContractOrigin::Stdin,
            abi: AbiParser::parse_abi_string(&content)?,
        })
    }

    /// Loads every `.json` file of the directory, in file name order.
    /// Files which are not a valid ABI are skipped.
    pub fn from_artifacts_path(path: &Utf8Path) -> AbisolCliResult<Vec<ContractData>> {
        let mut paths = vec![];

        for entry in path.read_dir_utf8()? {
            let entry = entry?;
            let file_path = entry.path();

            if file_path.is_file() && file_path.extension() == Some(ABI_EXTENSION) {
                paths.push(file_path.to_path_buf());
            }
        }

        paths.sort();

        let mut contracts = vec![];

        for file_path in paths {
            let Some(file_name) = file_path.file_name() else {
                continue;
            };

            let name = interface_name(file_name);

            match Self::from_file(&file_path, &name) {
                Ok(contract) => {
                    tracing::trace!("Adding {name} ({file_name}) to the list of contracts");
                    contracts.push(contract);
                }
                Err(e) => tracing::warn!("ABI file {file_name} could not be parsed: {e}"),
            }
        }

        if contracts.is_empty() {
            return Err(Error::Other(format!(
                "No ABI found with extension '{}' into '{}' directory",
                ABI_EXTENSION, path
            )));
        }

        Ok(contracts)
    }
}

/// Interface name for a file: the part before the first `.`, in PascalCase.
///
/// `erc20_token.abi.json` gives `Erc20Token`.
pub fn interface_name(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or(file_name);
    stem.to_case(Case::Pascal)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABI: &str = r#"[{ "type": "function", "name": "pause", "inputs": [], "outputs": [], "stateMutability": "nonpayable" }]"#;

    #[test]
    fn test_interface_name() {
        assert_eq!(interface_name("erc20_token.abi.json"), "Erc20Token");
        assert_eq!(interface_name("Vault.json"), "Vault");
        assert_eq!(interface_name("price-oracle.json"), "PriceOracle");
    }

    #[test]
    fn test_from_reader() {
        let contract = ContractParser::from_reader(ABI.as_bytes(), "IPausable").unwrap();
        assert_eq!(contract.name, "IPausable");
        assert_eq!(contract.origin, ContractOrigin::Stdin);
        assert_eq!(contract.abi.len(), 1);
    }

    #[test]
    fn test_from_artifacts_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();

        fs::write(root.join("vault.json"), ABI).unwrap();
        fs::write(
            root.join("access_control.json"),
            format!(r#"{{ "contractName": "AccessControl", "abi": {} }}"#, ABI),
        )
        .unwrap();
        fs::write(root.join("broken.json"), "{ not json").unwrap();
        fs::write(root.join("README.md"), "# not an abi").unwrap();

        let contracts = ContractParser::from_artifacts_path(root).unwrap();
        let names: Vec<_> = contracts.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["AccessControl", "Vault"]);
        assert_eq!(
            contracts[1].origin,
            ContractOrigin::File(root.join("vault.json"))
        );
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();

        assert!(ContractParser::from_artifacts_path(root).is_err());
    }
}
