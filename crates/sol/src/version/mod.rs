//! Solidity version ranges, as accepted by `pragma solidity`.
//!
//! A range is a `||` separated list of alternatives. Each alternative is a
//! set of comparators which must all hold (`>=0.7.0 <0.9.0`, `^0.8.4`),
//! or a hyphen range (`0.6.0 - 0.7.6`). A bare version is an exact match.
//!
//! Ranges are only ever evaluated against the known compiler releases, so
//! that the features of a range are a finite, deterministic set.
mod features;

pub use features::{AbiEncoderMode, DataLocation, Feature, FeatureMatrix, FeatureValue, Resolved};

use std::str::FromStr;

use semver::{Comparator, Version};

use crate::error::{Error, SolResult};

pub const DEFAULT_SOLIDITY_VERSION: &str = ">=0.7.0 <0.9.0";

/// Released compilers, as `(minor, last patch)` of the `0.x` series.
const SOLIDITY_RELEASES: [(u64, u64); 5] = [(4, 26), (5, 17), (6, 12), (7, 6), (8, 30)];

/// Every known compiler release, in ascending order.
pub fn solidity_releases() -> impl Iterator<Item = Version> {
    SOLIDITY_RELEASES.iter().flat_map(|&(minor, last_patch)| {
        (0..=last_patch).map(move |patch| Version::new(0, minor, patch))
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    raw: String,
    alternatives: Vec<Vec<Comparator>>,
}

impl VersionRange {
    pub fn parse(raw: &str) -> SolResult<Self> {
        let raw = raw.trim();

        let alternatives = raw
            .split("||")
            .map(|alternative| parse_alternative(alternative.trim(), raw))
            .collect::<SolResult<Vec<_>>>()?;

        Ok(Self {
            raw: raw.to_string(),
            alternatives,
        })
    }

    /// The range as written by the user.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives
            .iter()
            .any(|comparators| comparators.iter().all(|c| c.matches(version)))
    }

    /// Known releases admitted by the range.
    pub fn releases(&self) -> Vec<Version> {
        solidity_releases().filter(|v| self.matches(v)).collect()
    }

    /// The range in `pragma solidity` syntax, rebuilt from the parsed
    /// comparators. An alternative without comparators admits every
    /// release and is written as a lower bound on the first one.
    pub fn pragma(&self) -> String {
        self.alternatives
            .iter()
            .map(|comparators| {
                if comparators.is_empty() {
                    let (minor, _) = SOLIDITY_RELEASES[0];
                    return format!(">={}", Version::new(0, minor, 0));
                }

                comparators
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(" || ")
    }
}

impl FromStr for VersionRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_alternative(alternative: &str, raw: &str) -> SolResult<Vec<Comparator>> {
    if let Some((low, high)) = alternative.split_once(" - ") {
        return Ok(vec![
            parse_comparator(&format!(">={}", low.trim()), raw)?,
            parse_comparator(&format!("<={}", high.trim()), raw)?,
        ]);
    }

    let mut comparators = vec![];
    let mut pending_op = String::new();

    for token in alternative
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        // `>= 0.7.0`: the operator is glued back to its version.
        if token.chars().all(is_operator_char) {
            pending_op.push_str(token);
            continue;
        }

        let token = format!("{}{}", std::mem::take(&mut pending_op), token);

        if is_wildcard(&token) {
            continue;
        }

        let token = if token.starts_with(|c: char| c.is_ascii_digit()) && !has_wildcard(&token) {
            format!("={}", token)
        } else {
            token
        };

        comparators.push(parse_comparator(&token, raw)?);
    }

    if !pending_op.is_empty() {
        return Err(Error::InvalidVersionRange {
            range: raw.to_string(),
            reason: format!("operator `{}` has no version", pending_op),
        });
    }

    Ok(comparators)
}

fn parse_comparator(text: &str, raw: &str) -> SolResult<Comparator> {
    Comparator::from_str(text).map_err(|e| Error::InvalidVersionRange {
        range: raw.to_string(),
        reason: format!("`{}`: {}", text, e),
    })
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '^' | '~')
}

fn is_wildcard(token: &str) -> bool {
    matches!(token, "*" | "x" | "X")
}

fn has_wildcard(token: &str) -> bool {
    token.split('.').any(is_wildcard)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(minor: u64, patch: u64) -> Version {
        Version::new(0, minor, patch)
    }

    #[test]
    fn test_releases_are_sorted() {
        let releases: Vec<_> = solidity_releases().collect();
        assert_eq!(releases.first(), Some(&v(4, 0)));
        assert_eq!(releases.last(), Some(&v(8, 30)));
        assert!(releases.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_default_range() {
        let range = VersionRange::parse(DEFAULT_SOLIDITY_VERSION).unwrap();
        assert!(!range.matches(&v(6, 12)));
        assert!(range.matches(&v(7, 0)));
        assert!(range.matches(&v(8, 30)));
        assert_eq!(range.releases().len(), 7 + 31);
    }

    #[test]
    fn test_caret_and_exact() {
        let range = VersionRange::parse("^0.8.4").unwrap();
        assert!(!range.matches(&v(8, 3)));
        assert!(range.matches(&v(8, 4)));
        assert!(!range.matches(&Version::new(0, 9, 0)));

        let range = VersionRange::parse("0.6.12").unwrap();
        assert_eq!(range.releases(), vec![v(6, 12)]);

        let range = VersionRange::parse("=0.5.0").unwrap();
        assert_eq!(range.releases(), vec![v(5, 0)]);
    }

    #[test]
    fn test_detached_operators_and_commas() {
        let range = VersionRange::parse(">= 0.7.0, < 0.8.0").unwrap();
        assert_eq!(range.releases().len(), 7);
        assert_eq!(range.as_str(), ">= 0.7.0, < 0.8.0");
        assert_eq!(range.pragma(), ">=0.7.0 <0.8.0");
    }

    #[test]
    fn test_pragma() {
        assert_eq!(VersionRange::parse("").unwrap().pragma(), ">=0.4.0");
        assert_eq!(VersionRange::parse("*").unwrap().pragma(), ">=0.4.0");
        assert_eq!(
            VersionRange::parse(DEFAULT_SOLIDITY_VERSION).unwrap().pragma(),
            DEFAULT_SOLIDITY_VERSION
        );
        assert_eq!(
            VersionRange::parse("0.6.12 || ^0.8.4").unwrap().pragma(),
            "=0.6.12 || ^0.8.4"
        );
        assert_eq!(
            VersionRange::parse("0.6.0 - 0.7.6").unwrap().pragma(),
            ">=0.6.0 <=0.7.6"
        );
    }

    #[test]
    fn test_alternatives() {
        let range = VersionRange::parse("0.4.26 || ^0.8.0").unwrap();
        assert!(range.matches(&v(4, 26)));
        assert!(!range.matches(&v(5, 0)));
        assert!(range.matches(&v(8, 0)));
    }

    #[test]
    fn test_hyphen_range() {
        let range = VersionRange::parse("0.6.0 - 0.7.6").unwrap();
        assert!(!range.matches(&v(5, 17)));
        assert!(range.matches(&v(6, 0)));
        assert!(range.matches(&v(7, 6)));
        assert!(!range.matches(&v(8, 0)));
    }

    #[test]
    fn test_wildcards() {
        assert_eq!(
            VersionRange::parse("*").unwrap().releases().len(),
            solidity_releases().count()
        );
        assert_eq!(
            VersionRange::parse("").unwrap().releases().len(),
            solidity_releases().count()
        );
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(VersionRange::parse(">=banana").is_err());
        assert!(VersionRange::parse(">=0.7.0 <").is_err());
        assert!("^0.8".parse::<VersionRange>().is_ok());
    }
}
