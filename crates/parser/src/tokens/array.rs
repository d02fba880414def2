use crate::{AbiResult, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayDimension {
    Dynamic,
    Fixed(usize),
}

impl std::fmt::Display for ArrayDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrayDimension::Dynamic => f.write_str("[]"),
            ArrayDimension::Fixed(n) => write!(f, "[{}]", n),
        }
    }
}

/// Parses the array suffix of a type path, like `[][3]`.
///
/// Dimensions are returned in the textual order, so `uint8[2][]` is a dynamic
/// array of `uint8[2]` and yields `[Fixed(2), Dynamic]`.
pub fn parse_dimensions(suffix: &str, type_path: &str) -> AbiResult<Vec<ArrayDimension>> {
    let mut dimensions = vec![];
    let mut rest = suffix;

    while !rest.is_empty() {
        let (size, tail) = rest
            .strip_prefix('[')
            .and_then(|r| r.split_once(']'))
            .ok_or_else(|| {
                Error::TokenInitFailed(format!("Invalid array suffix in type `{}`", type_path))
            })?;

        if size.is_empty() {
            dimensions.push(ArrayDimension::Dynamic);
        } else {
            let n = size.parse::<usize>().map_err(|_| {
                Error::TokenInitFailed(format!(
                    "Invalid array size `{}` in type `{}`",
                    size, type_path
                ))
            })?;

            if n == 0 {
                return Err(Error::TokenInitFailed(format!(
                    "Zero sized array in type `{}`",
                    type_path
                )));
            }

            dimensions.push(ArrayDimension::Fixed(n));
        }

        rest = tail;
    }

    Ok(dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("", "uint8").unwrap(), vec![]);
        assert_eq!(
            parse_dimensions("[]", "uint8[]").unwrap(),
            vec![ArrayDimension::Dynamic]
        );
        assert_eq!(
            parse_dimensions("[2][]", "uint8[2][]").unwrap(),
            vec![ArrayDimension::Fixed(2), ArrayDimension::Dynamic]
        );
    }

    #[test]
    fn test_parse_dimensions_invalid() {
        assert!(parse_dimensions("[", "uint8[").is_err());
        assert!(parse_dimensions("[a]", "uint8[a]").is_err());
        assert!(parse_dimensions("[0]", "uint8[0]").is_err());
        assert!(parse_dimensions("[]x", "uint8[]x").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ArrayDimension::Dynamic.to_string(), "[]");
        assert_eq!(ArrayDimension::Fixed(4).to_string(), "[4]");
    }
}
