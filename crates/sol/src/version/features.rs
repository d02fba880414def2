//! Language features whose availability depends on the compiler version.
//!
//! A feature is resolved over every release admitted by a range: when all
//! of them agree the feature is [`Resolved::Concrete`], otherwise the range
//! straddles a change and the feature is [`Resolved::Ambiguous`].
use std::collections::BTreeMap;

use semver::Version;

use super::VersionRange;
use crate::error::{Error, SolResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// `receive() external payable` is available.
    ReceiveKeyword,
    /// `fallback() external` replaces the unnamed `function()`.
    FallbackKeyword,
    /// Data location of dynamic function inputs in interfaces.
    ArrayParameterLocation,
    /// Data location of dynamic function outputs.
    ReturnParameterLocation,
    /// Whether ABI coder v2 is the default or must be enabled.
    AbiEncoderV2,
    /// Structs may be declared at file level.
    GlobalStructs,
    /// Structs may be declared inside interfaces.
    StructsInInterfaces,
    /// `error` declarations are available.
    CustomErrors,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::ReceiveKeyword,
        Feature::FallbackKeyword,
        Feature::ArrayParameterLocation,
        Feature::ReturnParameterLocation,
        Feature::AbiEncoderV2,
        Feature::GlobalStructs,
        Feature::StructsInInterfaces,
        Feature::CustomErrors,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Feature::ReceiveKeyword => "receive-keyword",
            Feature::FallbackKeyword => "fallback-keyword",
            Feature::ArrayParameterLocation => "array-parameter-location",
            Feature::ReturnParameterLocation => "return-parameter-location",
            Feature::AbiEncoderV2 => "abiencoder-v2",
            Feature::GlobalStructs => "global-structs",
            Feature::StructsInInterfaces => "structs-in-interfaces",
            Feature::CustomErrors => "custom-errors",
        }
    }

    /// Value of the feature for a single compiler release.
    pub fn value_at(&self, version: &Version) -> FeatureValue {
        let at_least = |minor: u64, patch: u64| *version >= Version::new(0, minor, patch);

        match self {
            Feature::ReceiveKeyword | Feature::FallbackKeyword | Feature::GlobalStructs => {
                FeatureValue::Bool(at_least(6, 0))
            }
            Feature::StructsInInterfaces => FeatureValue::Bool(at_least(5, 0)),
            Feature::CustomErrors => FeatureValue::Bool(at_least(8, 4)),
            Feature::ArrayParameterLocation => FeatureValue::Location(if at_least(7, 0) {
                Some(DataLocation::Calldata)
            } else if at_least(5, 0) {
                Some(DataLocation::Memory)
            } else {
                None
            }),
            Feature::ReturnParameterLocation => {
                FeatureValue::Location(at_least(5, 0).then_some(DataLocation::Memory))
            }
            Feature::AbiEncoderV2 => FeatureValue::Encoder(if at_least(8, 0) {
                AbiEncoderMode::Default
            } else {
                AbiEncoderMode::Experimental
            }),
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataLocation {
    Calldata,
    Memory,
}

impl DataLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataLocation::Calldata => "calldata",
            DataLocation::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiEncoderMode {
    /// Requires `pragma experimental ABIEncoderV2;`.
    Experimental,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureValue {
    Bool(bool),
    /// `None` when no location keyword is written.
    Location(Option<DataLocation>),
    Encoder(AbiEncoderMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<T> {
    Concrete(T),
    Ambiguous,
}

impl<T> Resolved<T> {
    pub fn concrete(&self) -> Option<&T> {
        match self {
            Resolved::Concrete(v) => Some(v),
            Resolved::Ambiguous => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> Option<U>) -> Resolved<U> {
        match self {
            Resolved::Concrete(v) => f(v).map_or(Resolved::Ambiguous, Resolved::Concrete),
            Resolved::Ambiguous => Resolved::Ambiguous,
        }
    }
}

/// Resolved value of every [`Feature`] for a version range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureMatrix {
    range: VersionRange,
    values: BTreeMap<Feature, Resolved<FeatureValue>>,
}

impl FeatureMatrix {
    pub fn for_range(range: &VersionRange) -> SolResult<Self> {
        let releases = range.releases();

        if releases.is_empty() {
            return Err(Error::UnsatisfiableVersionRange(range.to_string()));
        }

        let mut values = BTreeMap::new();

        for feature in Feature::ALL {
            let first = feature.value_at(&releases[0]);
            let resolved = if releases.iter().all(|v| feature.value_at(v) == first) {
                Resolved::Concrete(first)
            } else {
                Resolved::Ambiguous
            };

            tracing::trace!("feature {} resolved to {:?} for `{}`", feature, resolved, range);
            values.insert(feature, resolved);
        }

        Ok(Self {
            range: range.clone(),
            values,
        })
    }

    pub fn range(&self) -> &VersionRange {
        &self.range
    }

    pub fn get(&self, feature: Feature) -> Resolved<FeatureValue> {
        self.values
            .get(&feature)
            .copied()
            .unwrap_or(Resolved::Ambiguous)
    }

    pub fn flag(&self, feature: Feature) -> Resolved<bool> {
        self.get(feature).map(|value| match value {
            FeatureValue::Bool(b) => Some(b),
            _ => None,
        })
    }

    pub fn location(&self, feature: Feature) -> Resolved<Option<DataLocation>> {
        self.get(feature).map(|value| match value {
            FeatureValue::Location(l) => Some(l),
            _ => None,
        })
    }

    pub fn abi_encoder(&self) -> Resolved<AbiEncoderMode> {
        self.get(Feature::AbiEncoderV2).map(|value| match value {
            FeatureValue::Encoder(mode) => Some(mode),
            _ => None,
        })
    }

    /// The feature is available for every release of the range.
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.flag(feature) == Resolved::Concrete(true)
    }

    pub fn require_flag(&self, feature: Feature) -> SolResult<bool> {
        match self.flag(feature) {
            Resolved::Concrete(b) => Ok(b),
            Resolved::Ambiguous => Err(self.ambiguous(feature)),
        }
    }

    /// Fails unless the feature is available for every release of the range.
    pub fn require_enabled(&self, feature: Feature) -> SolResult<()> {
        if self.require_flag(feature)? {
            Ok(())
        } else {
            Err(Error::UnsupportedFeature {
                range: self.range.to_string(),
                feature,
            })
        }
    }

    pub fn require_location(&self, feature: Feature) -> SolResult<Option<DataLocation>> {
        match self.location(feature) {
            Resolved::Concrete(location) => Ok(location),
            Resolved::Ambiguous => Err(self.ambiguous(feature)),
        }
    }

    fn ambiguous(&self, feature: Feature) -> Error {
        Error::AmbiguousFeature {
            range: self.range.to_string(),
            feature,
        }
    }
}
