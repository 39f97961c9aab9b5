#![allow(clippy::from_over_into)]

use crate::spec_error::SpecError;
use crate::{NIGHTLY, VersionSpec, clean_version_req_string, clean_version_string};
use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Represents an unresolved version constraint that must be resolved
/// against a release catalog.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged, into = "String", try_from = "String")]
pub enum UnresolvedVersionSpec {
    /// The continuously built nightly channel.
    Nightly,
    /// A partial version, requirement, or range (`^`, `~`, etc).
    Req(VersionReq),
    /// A list of requirements to match any against (joined by `||`).
    ReqAny(Vec<VersionReq>),
    /// An exact semantic version, used as-is without a catalog check.
    Version(Version),
}

impl UnresolvedVersionSpec {
    /// Parse the provided string into an unresolved specification based
    /// on the following rules, in order:
    ///
    /// - If the value "nightly", map as `Nightly` variant.
    /// - If the raw value is a valid semantic version, map as `Version`.
    ///   A "v" prefix disqualifies the value from being exact.
    /// - If contains `||`, split and parse each item with [`VersionReq`],
    ///   and map as `ReqAny`.
    /// - Else parse with [`VersionReq`], and map as `Req`. Partial versions
    ///   without an operator are treated as X-ranges (`1.6` -> `~1.6`).
    pub fn parse<T: AsRef<str>>(value: T) -> Result<Self, SpecError> {
        Self::from_str(value.as_ref())
    }

    /// Return true if the current specification is nightly.
    pub fn is_nightly(&self) -> bool {
        matches!(self, Self::Nightly)
    }

    /// Return true if the provided version satisfies this specification.
    /// Nightly never matches a catalog version.
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Self::Nightly => false,
            Self::Req(req) => req.matches(version),
            Self::ReqAny(reqs) => reqs.iter().any(|req| req.matches(version)),
            Self::Version(exact) => exact == version,
        }
    }

    /// Convert the current unresolved specification to a resolved specification.
    /// Note that this *does not* resolve anything against a catalog, and
    /// returns `None` for requirements.
    pub fn to_resolved_spec(&self) -> Option<VersionSpec> {
        match self {
            Self::Nightly => Some(VersionSpec::Nightly),
            Self::Version(version) => Some(VersionSpec::Version(version.to_owned())),
            _ => None,
        }
    }
}

fn parse_req(input: &str, value: &str) -> Result<VersionReq, SpecError> {
    let value = clean_version_req_string(value);

    if value.is_empty() {
        return Ok(VersionReq::STAR);
    }

    VersionReq::parse(&value).map_err(|error| SpecError::InvalidConstraint {
        input: input.to_owned(),
        error,
    })
}

impl FromStr for UnresolvedVersionSpec {
    type Err = SpecError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = input.trim();

        if value == NIGHTLY {
            return Ok(UnresolvedVersionSpec::Nightly);
        }

        if let Ok(version) = Version::parse(value) {
            return Ok(UnresolvedVersionSpec::Version(version));
        }

        let value = clean_version_string(value);

        // OR requirements
        if value.contains("||") {
            let mut reqs = vec![];

            for part in value.split("||") {
                reqs.push(parse_req(input, part)?);
            }

            return Ok(UnresolvedVersionSpec::ReqAny(reqs));
        }

        Ok(UnresolvedVersionSpec::Req(parse_req(input, &value)?))
    }
}

impl TryFrom<String> for UnresolvedVersionSpec {
    type Error = SpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl Into<String> for UnresolvedVersionSpec {
    fn into(self) -> String {
        self.to_string()
    }
}

impl Display for UnresolvedVersionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nightly => write!(f, "{NIGHTLY}"),
            Self::Req(req) => write!(f, "{req}"),
            Self::ReqAny(reqs) => write!(
                f,
                "{}",
                reqs.iter()
                    .map(|req| req.to_string())
                    .collect::<Vec<_>>()
                    .join(" || ")
            ),
            Self::Version(version) => write!(f, "{version}"),
        }
    }
}

impl PartialEq<VersionSpec> for UnresolvedVersionSpec {
    fn eq(&self, other: &VersionSpec) -> bool {
        match (self, other) {
            (Self::Nightly, VersionSpec::Nightly) => true,
            (Self::Version(v1), VersionSpec::Version(v2)) => v1 == v2,
            _ => false,
        }
    }
}

impl AsRef<UnresolvedVersionSpec> for UnresolvedVersionSpec {
    fn as_ref(&self) -> &UnresolvedVersionSpec {
        self
    }
}
