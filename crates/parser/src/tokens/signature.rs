//! Structural signature of tuple types.
//!
//! Two tuples share a signature if and only if they have the same ordered
//! list of member names and member types, nested tuples included. The
//! location where the tuple is used (function input, event, other tuple...)
//! and the name of the parameter itself are not part of the signature.
//!
//! `(address maker,(address token,uint256 amount)[] legs)`
use super::AbiType;
use crate::{AbiParameter, AbiResult, Error};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    /// Returns the signature of the given parameter if it is a tuple (or an
    /// array of tuples), `None` otherwise.
    pub fn of(param: &AbiParameter) -> AbiResult<Option<Self>> {
        let abi_type = param.abi_type()?;

        if !abi_type.is_tuple() {
            return Ok(None);
        }

        if let Some(hint) = &param.signature {
            return Ok(Some(Self(hint.clone())));
        }

        if param.components.is_none() {
            return Err(Error::TokenInitFailed(format!(
                "Tuple parameter `{}` has no components",
                param.name
            )));
        }

        Self::from_components(param.components()).map(Some)
    }

    pub fn from_components(components: &[AbiParameter]) -> AbiResult<Self> {
        let mut members = vec![];

        for c in components {
            let abi_type: AbiType = c.abi_type()?;

            let member_type = match Self::of(c)? {
                Some(nested) => format!("{}{}", nested.0, abi_type.array_suffix()),
                None => abi_type.type_path,
            };

            if c.name.is_empty() {
                members.push(member_type);
            } else {
                members.push(format!("{} {}", member_type, c.name));
            }
        }

        Ok(Self(format!("({})", members.join(","))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str) -> AbiParameter {
        AbiParameter::tuple(
            name,
            "tuple",
            vec![
                AbiParameter::new("x", "uint256"),
                AbiParameter::new("y", "uint256"),
            ],
        )
    }

    #[test]
    fn test_not_a_tuple() {
        assert_eq!(
            Signature::of(&AbiParameter::new("a", "uint256")).unwrap(),
            None
        );
    }

    #[test]
    fn test_flat_signature() {
        assert_eq!(
            Signature::of(&point("p")).unwrap().unwrap().as_str(),
            "(uint256 x,uint256 y)"
        );
    }

    #[test]
    fn test_same_shape_different_parameter_name() {
        let a = Signature::of(&point("from")).unwrap();
        let b = Signature::of(&point("to")).unwrap();
        assert_eq!(a, b);

        let mut arr = point("points");
        arr.r#type = "tuple[]".to_string();
        assert_eq!(Signature::of(&arr).unwrap(), a);
    }

    #[test]
    fn test_member_names_matter() {
        let other = AbiParameter::tuple(
            "p",
            "tuple",
            vec![
                AbiParameter::new("a", "uint256"),
                AbiParameter::new("b", "uint256"),
            ],
        );

        assert_ne!(
            Signature::of(&other).unwrap(),
            Signature::of(&point("p")).unwrap()
        );
    }

    #[test]
    fn test_nested_signature() {
        let mut points = point("points");
        points.r#type = "tuple[2]".to_string();

        let segment = AbiParameter::tuple(
            "segment",
            "tuple",
            vec![points, AbiParameter::new("label", "string")],
        );

        assert_eq!(
            Signature::of(&segment).unwrap().unwrap().as_str(),
            "((uint256 x,uint256 y)[2] points,string label)"
        );
    }

    #[test]
    fn test_explicit_signature_hint() {
        let mut p = point("p");
        p.signature = Some("Point".to_string());

        assert_eq!(Signature::of(&p).unwrap().unwrap().as_str(), "Point");
    }

    #[test]
    fn test_tuple_without_components() {
        assert!(Signature::of(&AbiParameter::new("t", "tuple")).is_err());
    }
}
