//! # Interfaces expansion
//!
//! The generated interface holds its own structs followed by one
//! declaration per ABI entry, in ABI order. Structs owned by other
//! containers are declared in sibling interfaces named after them, and
//! shared structs at file level (or in the `__Structs` wrapper).
use abisol_parser::AbiEntry;

use super::{
    ExpandContext, SolError, SolEvent, SolFallback, SolFunction, SolReceive, SolStruct, SolWriter,
};
use crate::declarations::Scope;
use crate::error::SolResult;

pub struct SolInterface;

impl SolInterface {
    pub fn expand(abi: &[AbiEntry], ctx: &ExpandContext) -> SolResult<String> {
        let mut entries = vec![];

        for entry in abi {
            let line = match entry {
                AbiEntry::Function(f) => Some(SolFunction::expand(f, ctx)?),
                // Interfaces can't declare constructors.
                AbiEntry::Constructor(_) => None,
                AbiEntry::Fallback(f) => Some(SolFallback::expand(f, ctx)?),
                AbiEntry::Receive(_) => SolReceive::expand(ctx)?,
                AbiEntry::Event(e) => Some(SolEvent::expand(e, ctx)?),
                AbiEntry::Error(e) => Some(SolError::expand(e, ctx)?),
            };

            if let Some(line) = line {
                entries.push(line);
            }
        }

        let structs = ctx.declarations.in_scope(&ctx.interface_scope());

        let mut writer = SolWriter::new();
        writer.open(&format!("interface {}", ctx.interface_name));

        SolStruct::expand_all(&structs, ctx, &mut writer)?;

        if !structs.is_empty() && !entries.is_empty() {
            writer.blank_line();
        }

        for line in &entries {
            writer.line(line);
        }

        writer.close();

        Ok(writer.finish())
    }

    /// Shared structs, `None` when there are none.
    pub fn expand_shared(ctx: &ExpandContext) -> SolResult<Option<String>> {
        let structs = ctx.declarations.in_scope(&Scope::Shared);

        if structs.is_empty() {
            return Ok(None);
        }

        let mut writer = SolWriter::new();

        match ctx.shared_interface() {
            Some(wrapper) => {
                writer.open(&format!("interface {}", wrapper));
                SolStruct::expand_all(&structs, ctx, &mut writer)?;
                writer.close();
            }
            None => SolStruct::expand_all(&structs, ctx, &mut writer)?,
        }

        Ok(Some(writer.finish()))
    }

    /// One interface per foreign container owning at least one struct.
    pub fn expand_containers(ctx: &ExpandContext) -> SolResult<Vec<String>> {
        let mut out = vec![];

        for container in ctx.declarations.containers() {
            if container.is_empty() || container == ctx.interface_name {
                continue;
            }

            let structs = ctx
                .declarations
                .in_scope(&Scope::Container(container.to_string()));

            if structs.is_empty() {
                continue;
            }

            let mut writer = SolWriter::new();
            writer.open(&format!("interface {}", container));
            SolStruct::expand_all(&structs, ctx, &mut writer)?;
            writer.close();

            out.push(writer.finish());
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::test_utils::Fixture;
    use abisol_parser::{AbiConstructor, AbiFunction, AbiParameter, StateMutability};

    fn function(name: &str, inputs: Vec<AbiParameter>) -> AbiEntry {
        AbiEntry::Function(AbiFunction {
            name: name.to_string(),
            inputs,
            outputs: vec![],
            state_mutability: StateMutability::Nonpayable,
        })
    }

    #[test]
    fn test_constructor_is_skipped() {
        let abi = vec![
            AbiEntry::Constructor(AbiConstructor {
                inputs: vec![AbiParameter::new("owner", "address")],
                state_mutability: StateMutability::Nonpayable,
            }),
            function("pause", vec![]),
        ];

        let fixture = Fixture::new(&abi, "^0.8.0");

        assert_eq!(
            SolInterface::expand(&abi, &fixture.ctx()).unwrap(),
            "interface I {\n    function pause() external;\n}\n"
        );
    }

    #[test]
    fn test_own_structs_first() {
        let abi = vec![function(
            "set",
            vec![AbiParameter::tuple(
                "p",
                "tuple",
                vec![AbiParameter::new("x", "uint256")],
            )],
        )];

        let fixture = Fixture::new(&abi, "^0.8.0");

        assert_eq!(
            SolInterface::expand(&abi, &fixture.ctx()).unwrap(),
            "interface I {\n    struct S_0 {\n        uint256 x;\n    }\n\n    function set(S_0 calldata p) external;\n}\n"
        );
        assert!(SolInterface::expand_shared(&fixture.ctx()).unwrap().is_none());
        assert!(SolInterface::expand_containers(&fixture.ctx()).unwrap().is_empty());
    }

    #[test]
    fn test_shared_and_foreign_structs() {
        let shared = AbiParameter::tuple("a", "tuple", vec![AbiParameter::new("x", "uint8")])
            .with_internal_type("struct Shared");
        let foreign = AbiParameter::tuple("b", "tuple", vec![AbiParameter::new("y", "bool")])
            .with_internal_type("struct Vault.Config");
        let abi = vec![function("f", vec![shared, foreign])];

        let fixture = Fixture::new(&abi, "^0.8.0");
        let ctx = fixture.ctx();

        assert_eq!(
            SolInterface::expand_shared(&ctx).unwrap().unwrap(),
            "struct Shared {\n    uint8 x;\n}\n"
        );
        assert_eq!(
            SolInterface::expand_containers(&ctx).unwrap(),
            vec!["interface Vault {\n    struct Config {\n        bool y;\n    }\n}\n".to_string()]
        );

        let fixture = Fixture::new(&abi, "^0.5.0");
        assert_eq!(
            SolInterface::expand_shared(&fixture.ctx()).unwrap().unwrap(),
            "interface __Structs {\n    struct Shared {\n        uint8 x;\n    }\n}\n"
        );
    }
}
