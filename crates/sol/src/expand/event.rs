//! # Events expansion
//!
//! Event parameters never carry a data location.
use abisol_parser::AbiEvent;

use super::{types, utils, ExpandContext};
use crate::error::SolResult;

pub struct SolEvent;

impl SolEvent {
    pub fn expand(event: &AbiEvent, ctx: &ExpandContext) -> SolResult<String> {
        let site = ctx.interface_scope();

        let params = event
            .inputs
            .iter()
            .map(|p| types::expand_parameter(p, ctx, &site, None, p.is_indexed()))
            .collect::<SolResult<Vec<_>>>()?;

        let anonymous = if event.anonymous { " anonymous" } else { "" };

        Ok(format!(
            "event {}({}){};",
            event.name,
            utils::join_params(&params),
            anonymous
        ))
    }
}
