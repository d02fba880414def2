use super::{utils, AbiToSol, ExpandContext, SolWriter};
use crate::declarations::Declaration;
use crate::error::SolResult;

pub struct SolStruct;

impl SolStruct {
    /// Writes the struct declaration. Member types are resolved from the
    /// scope of the declaration itself.
    pub fn expand_decl(
        decl: &Declaration,
        ctx: &ExpandContext,
        writer: &mut SolWriter,
    ) -> SolResult<()> {
        writer.open(&format!("struct {}", decl.identifier));

        for (position, member) in decl.components.iter().enumerate() {
            writer.line(&format!(
                "{} {};",
                member.to_sol_type(ctx, &decl.scope)?,
                utils::member_name(member, position)
            ));
        }

        writer.close();

        Ok(())
    }

    /// Writes declarations separated by blank lines.
    pub fn expand_all(
        decls: &[&Declaration],
        ctx: &ExpandContext,
        writer: &mut SolWriter,
    ) -> SolResult<()> {
        for (idx, decl) in decls.iter().enumerate() {
            if idx > 0 {
                writer.blank_line();
            }
            Self::expand_decl(decl, ctx, writer)?;
        }

        Ok(())
    }
}
