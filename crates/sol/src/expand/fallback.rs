//! # Fallback and receive expansion
//!
//! Before the `receive` keyword existed, plain ether transfers were handled
//! by a payable fallback. When the ABI defines a `receive` entry that the
//! target compilers cannot express, it is folded into the fallback:
//!
//! * the ABI fallback becomes payable, if there is one;
//! * otherwise a payable fallback is declared in its place.
use abisol_parser::AbiFallback;

use super::ExpandContext;
use crate::error::SolResult;
use crate::version::Feature;

pub struct SolFallback;

impl SolFallback {
    pub fn expand(fallback: &AbiFallback, ctx: &ExpandContext) -> SolResult<String> {
        let keyword = ctx.features.require_flag(Feature::FallbackKeyword)?;

        let serves_receive =
            ctx.abi_features.defines_receive && !ctx.features.is_enabled(Feature::ReceiveKeyword);

        Ok(Self::declaration(
            keyword,
            fallback.state_mutability.is_payable() || serves_receive,
        ))
    }

    pub(crate) fn declaration(keyword: bool, payable: bool) -> String {
        let head = if keyword {
            "fallback () external"
        } else {
            "function () external"
        };

        if payable {
            format!("{} payable;", head)
        } else {
            format!("{};", head)
        }
    }
}

pub struct SolReceive;

impl SolReceive {
    pub fn expand(ctx: &ExpandContext) -> SolResult<Option<String>> {
        if ctx.features.is_enabled(Feature::ReceiveKeyword) {
            return Ok(Some("receive () external payable;".to_string()));
        }

        if ctx.abi_features.defines_fallback {
            return Ok(None);
        }

        let keyword = ctx.features.require_flag(Feature::FallbackKeyword)?;

        Ok(Some(SolFallback::declaration(keyword, true)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::expand::test_utils::Fixture;
    use abisol_parser::{AbiEntry, AbiReceive, StateMutability};

    fn fallback(state_mutability: StateMutability) -> AbiFallback {
        AbiFallback { state_mutability }
    }

    #[test]
    fn test_modern_keywords() {
        let f = fallback(StateMutability::Nonpayable);
        let abi = vec![
            AbiEntry::Fallback(f.clone()),
            AbiEntry::Receive(AbiReceive::default()),
        ];
        let fixture = Fixture::new(&abi, "^0.8.0");
        let ctx = fixture.ctx();

        assert_eq!(SolFallback::expand(&f, &ctx).unwrap(), "fallback () external;");
        assert_eq!(
            SolReceive::expand(&ctx).unwrap().as_deref(),
            Some("receive () external payable;")
        );
    }

    #[test]
    fn test_receive_folded_into_fallback() {
        let f = fallback(StateMutability::Nonpayable);
        let abi = vec![
            AbiEntry::Fallback(f.clone()),
            AbiEntry::Receive(AbiReceive::default()),
        ];
        let fixture = Fixture::new(&abi, "^0.5.0");
        let ctx = fixture.ctx();

        assert_eq!(
            SolFallback::expand(&f, &ctx).unwrap(),
            "function () external payable;"
        );
        assert_eq!(SolReceive::expand(&ctx).unwrap(), None);
    }

    #[test]
    fn test_receive_without_fallback() {
        let abi = vec![AbiEntry::Receive(AbiReceive::default())];
        let fixture = Fixture::new(&abi, "^0.5.0");

        assert_eq!(
            SolReceive::expand(&fixture.ctx()).unwrap().as_deref(),
            Some("function () external payable;")
        );
    }

    #[test]
    fn test_payable_fallback() {
        let f = fallback(StateMutability::Payable);
        let fixture = Fixture::new(&[AbiEntry::Fallback(f.clone())], "^0.8.0");

        assert_eq!(
            SolFallback::expand(&f, &fixture.ctx()).unwrap(),
            "fallback () external payable;"
        );
    }

    #[test]
    fn test_ambiguous_fallback_keyword() {
        let f = fallback(StateMutability::Nonpayable);
        let fixture = Fixture::new(&[AbiEntry::Fallback(f.clone())], ">=0.5.0 <0.7.0");

        assert!(matches!(
            SolFallback::expand(&f, &fixture.ctx()),
            Err(Error::AmbiguousFeature {
                feature: Feature::FallbackKeyword,
                ..
            })
        ));
    }
}
