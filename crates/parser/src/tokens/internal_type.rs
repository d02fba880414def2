/// The `internalType` compilers attach to parameters.
///
/// It carries information lost by the ABI type, like the declared struct
/// name (`struct Exchange.Order[]`) or the full signature of a function type
/// (`function (uint256) external returns (bool)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalType {
    Struct {
        /// Contract or interface declaring the struct, `None` for file level structs.
        container: Option<String>,
        name: String,
    },
    Function(String),
    Other(String),
}

impl InternalType {
    pub fn parse(internal_type: &str) -> Self {
        let internal_type = internal_type.trim();

        if let Some(path) = internal_type.strip_prefix("struct ") {
            let path = path.split('[').next().unwrap_or(path).trim();

            return match path.split_once('.') {
                Some((container, name)) => InternalType::Struct {
                    container: Some(container.to_string()),
                    name: name.to_string(),
                },
                None => InternalType::Struct {
                    container: None,
                    name: path.to_string(),
                },
            };
        }

        if internal_type.starts_with("function ") || internal_type.starts_with("function(") {
            return InternalType::Function(internal_type.to_string());
        }

        InternalType::Other(internal_type.to_string())
    }
}
