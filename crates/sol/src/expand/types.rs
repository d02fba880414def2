use abisol_parser::tokens::{AbiType, BaseType, InternalType, Signature};
use abisol_parser::AbiParameter;

use super::{utils, ExpandContext};
use crate::declarations::Scope;
use crate::error::{Error, SolResult};
use crate::version::DataLocation;

/// Written for `function` parameters when the exact function type is unknown.
pub const FUNCTION_TYPE_FALLBACK: &str = "function() external";

pub trait AbiToSol {
    /// The Solidity type, as written in code located in `site`.
    fn to_sol_type(&self, ctx: &ExpandContext, site: &Scope) -> SolResult<String>;
}

impl AbiToSol for AbiParameter {
    fn to_sol_type(&self, ctx: &ExpandContext, site: &Scope) -> SolResult<String> {
        let abi_type = self.abi_type()?;

        match abi_type.base {
            BaseType::Tuple => {
                let signature = Signature::of(self)?
                    .ok_or_else(|| Error::UndeclaredStruct(self.name.clone()))?;

                let decl = ctx
                    .declarations
                    .get(&signature)
                    .ok_or_else(|| Error::UndeclaredStruct(signature.to_string()))?;

                Ok(format!(
                    "{}{}",
                    ctx.qualified_identifier(decl, site),
                    abi_type.array_suffix()
                ))
            }
            BaseType::Function => match self.internal_type.as_deref().map(InternalType::parse) {
                Some(InternalType::Function(signature)) => Ok(signature),
                _ => {
                    tracing::warn!(
                        "parameter `{}` has type `function` without internalType, falling back to `{}`",
                        self.name,
                        FUNCTION_TYPE_FALLBACK
                    );

                    Ok(format!(
                        "{}{} /* warning: the actual function type is unknown */",
                        FUNCTION_TYPE_FALLBACK,
                        abi_type.array_suffix()
                    ))
                }
            },
            _ => Ok(abi_type.type_path),
        }
    }
}

/// `type [location] [indexed] [name]`.
pub fn expand_parameter(
    param: &AbiParameter,
    ctx: &ExpandContext,
    site: &Scope,
    location: Option<DataLocation>,
    indexed: bool,
) -> SolResult<String> {
    let mut out = param.to_sol_type(ctx, site)?;

    if let Some(location) = location {
        out.push(' ');
        out.push_str(location.as_str());
    }

    if indexed {
        out.push_str(" indexed");
    }

    if !param.name.is_empty() {
        out.push(' ');
        out.push_str(&param.name);
    }

    Ok(out)
}

/// Expands a parameter list, asking `location_of` for the data location
/// of each parameter type.
pub fn expand_parameters<F>(
    params: &[AbiParameter],
    ctx: &ExpandContext,
    site: &Scope,
    location_of: F,
) -> SolResult<String>
where
    F: Fn(&AbiType) -> SolResult<Option<DataLocation>>,
{
    let mut out = vec![];

    for p in params {
        let location = location_of(&p.abi_type()?)?;
        out.push(expand_parameter(p, ctx, site, location, false)?);
    }

    Ok(utils::join_params(&out))
}
