//! # Functions expansion
//!
//! Every function of the ABI becomes an `external` function declaration.
//! The state mutability is written unless it is `nonpayable`, which is the
//! implicit default in Solidity. Dynamic inputs and outputs receive the data
//! location supported by the whole version range, if any.
use abisol_parser::{AbiFunction, StateMutability};

use super::{types, ExpandContext};
use crate::error::SolResult;

pub struct SolFunction;

impl SolFunction {
    pub fn expand(func: &AbiFunction, ctx: &ExpandContext) -> SolResult<String> {
        let site = ctx.interface_scope();

        let inputs = types::expand_parameters(&func.inputs, ctx, &site, |t| ctx.input_location(t))?;

        let mut decl = format!("function {}({}) external", func.name, inputs);

        if func.state_mutability != StateMutability::Nonpayable {
            decl.push(' ');
            decl.push_str(func.state_mutability.as_str());
        }

        if !func.outputs.is_empty() {
            let outputs =
                types::expand_parameters(&func.outputs, ctx, &site, |t| ctx.output_location(t))?;
            decl.push_str(&format!(" returns ({})", outputs));
        }

        decl.push(';');

        Ok(decl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::expand::test_utils::Fixture;
    use crate::version::Feature;
    use abisol_parser::{AbiEntry, AbiParameter};

    fn func(
        inputs: Vec<AbiParameter>,
        outputs: Vec<AbiParameter>,
        state_mutability: StateMutability,
    ) -> AbiFunction {
        AbiFunction {
            name: "transfer".to_string(),
            inputs,
            outputs,
            state_mutability,
        }
    }

    fn expand(f: &AbiFunction, range: &str) -> SolResult<String> {
        let fixture = Fixture::new(&[AbiEntry::Function(f.clone())], range);
        SolFunction::expand(f, &fixture.ctx())
    }

    #[test]
    fn test_nonpayable_without_outputs() {
        let f = func(
            vec![
                AbiParameter::new("to", "address"),
                AbiParameter::new("amount", "uint256"),
            ],
            vec![],
            StateMutability::Nonpayable,
        );

        assert_eq!(
            expand(&f, "^0.8.0").unwrap(),
            "function transfer(address to, uint256 amount) external;"
        );
    }

    #[test]
    fn test_view_with_outputs() {
        let f = func(
            vec![AbiParameter::new("ids", "uint256[]")],
            vec![AbiParameter::new("", "string"), AbiParameter::new("ok", "bool")],
            StateMutability::View,
        );

        assert_eq!(
            expand(&f, "^0.8.0").unwrap(),
            "function transfer(uint256[] calldata ids) external view returns (string memory, bool ok);"
        );
        assert_eq!(
            expand(&f, "^0.6.0").unwrap(),
            "function transfer(uint256[] memory ids) external view returns (string memory, bool ok);"
        );
        assert_eq!(
            expand(&f, "^0.4.24").unwrap(),
            "function transfer(uint256[] ids) external view returns (string, bool ok);"
        );
    }

    #[test]
    fn test_payable() {
        let f = func(vec![], vec![], StateMutability::Payable);
        assert_eq!(expand(&f, "^0.8.0").unwrap(), "function transfer() external payable;");
    }

    #[test]
    fn test_ambiguous_location() {
        let f = func(
            vec![AbiParameter::new("data", "bytes")],
            vec![],
            StateMutability::Nonpayable,
        );

        assert!(matches!(
            expand(&f, ">=0.6.0 <0.8.0"),
            Err(Error::AmbiguousFeature {
                feature: Feature::ArrayParameterLocation,
                ..
            })
        ));

        // Static parameters never need a location.
        let f = func(
            vec![AbiParameter::new("a", "uint8")],
            vec![],
            StateMutability::Nonpayable,
        );
        assert!(expand(&f, ">=0.6.0 <0.8.0").is_ok());
    }
}
