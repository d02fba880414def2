pub(crate) mod error;
pub(crate) mod event;
pub(crate) mod fallback;
pub(crate) mod function;
pub(crate) mod interface;
pub(crate) mod r#struct;
pub(crate) mod types;
pub(crate) mod utils;

pub use error::SolError;
pub use event::SolEvent;
pub use fallback::{SolFallback, SolReceive};
pub use function::SolFunction;
pub use interface::SolInterface;
pub use r#struct::SolStruct;
pub use types::AbiToSol;
pub use utils::SolWriter;

use abisol_parser::tokens::AbiType;
use abisol_parser::AbiFeatures;

use crate::declarations::{Declaration, Declarations, Scope};
use crate::error::SolResult;
use crate::version::{DataLocation, Feature, FeatureMatrix};

/// Interface wrapping shared structs when the compiler has no file level structs.
pub const SHARED_STRUCTS_INTERFACE: &str = "__Structs";

/// Everything known about the ABI and the target compilers while expanding.
#[derive(Debug, Clone, Copy)]
pub struct ExpandContext<'a> {
    pub features: &'a FeatureMatrix,
    pub abi_features: &'a AbiFeatures,
    pub declarations: &'a Declarations,
    pub interface_name: &'a str,
}

impl<'a> ExpandContext<'a> {
    pub fn interface_scope(&self) -> Scope {
        Scope::Container(self.interface_name.to_string())
    }

    /// Name of the interface holding shared structs, `None` if they are
    /// declared at file level.
    pub fn shared_interface(&self) -> Option<&'static str> {
        if self.features.is_enabled(Feature::GlobalStructs) {
            None
        } else {
            Some(SHARED_STRUCTS_INTERFACE)
        }
    }

    /// Identifier to use for `decl` in code located in `site`.
    pub fn qualified_identifier(&self, decl: &Declaration, site: &Scope) -> String {
        if &decl.scope == site {
            return decl.identifier.clone();
        }

        match &decl.scope {
            Scope::Container(container) => format!("{}.{}", container, decl.identifier),
            Scope::Shared => match self.shared_interface() {
                Some(wrapper) => format!("{}.{}", wrapper, decl.identifier),
                None => decl.identifier.clone(),
            },
        }
    }

    pub fn input_location(&self, abi_type: &AbiType) -> SolResult<Option<DataLocation>> {
        self.location_for(abi_type, Feature::ArrayParameterLocation)
    }

    pub fn output_location(&self, abi_type: &AbiType) -> SolResult<Option<DataLocation>> {
        self.location_for(abi_type, Feature::ReturnParameterLocation)
    }

    fn location_for(&self, abi_type: &AbiType, feature: Feature) -> SolResult<Option<DataLocation>> {
        if !abi_type.requires_location() {
            return Ok(None);
        }

        self.features.require_location(feature)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use abisol_parser::{AbiEntry, AbiFeatures};

    use crate::declarations::Declarations;
    use crate::version::{FeatureMatrix, VersionRange};

    /// Owned state behind an [`super::ExpandContext`] for unit tests.
    pub struct Fixture {
        pub features: FeatureMatrix,
        pub abi_features: AbiFeatures,
        pub declarations: Declarations,
        pub name: String,
    }

    impl Fixture {
        pub fn new(abi: &[AbiEntry], range: &str) -> Self {
            Self {
                features: FeatureMatrix::for_range(&VersionRange::parse(range).unwrap()).unwrap(),
                abi_features: AbiFeatures::collect(abi).unwrap(),
                declarations: Declarations::collect(abi, "I").unwrap(),
                name: "I".to_string(),
            }
        }

        pub fn ctx(&self) -> super::ExpandContext<'_> {
            super::ExpandContext {
                features: &self.features,
                abi_features: &self.abi_features,
                declarations: &self.declarations,
                interface_name: &self.name,
            }
        }
    }
}
