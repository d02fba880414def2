//! # Custom errors expansion
//!
//! Only available on compilers supporting `error` declarations. A range
//! which may include older compilers is rejected.
use abisol_parser::AbiError;

use super::{types, ExpandContext};
use crate::error::SolResult;
use crate::version::Feature;

pub struct SolError;

impl SolError {
    pub fn expand(error: &AbiError, ctx: &ExpandContext) -> SolResult<String> {
        ctx.features.require_enabled(Feature::CustomErrors)?;

        let params =
            types::expand_parameters(&error.inputs, ctx, &ctx.interface_scope(), |_| Ok(None))?;

        Ok(format!("error {}({});", error.name, params))
    }
}
