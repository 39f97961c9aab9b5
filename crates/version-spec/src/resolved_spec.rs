#![allow(clippy::from_over_into)]

use crate::spec_error::SpecError;
use crate::{NIGHTLY, UnresolvedVersionSpec, clean_version_string};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Represents a resolved version: either the nightly channel,
/// or a fully-qualified semantic version.
#[derive(Clone, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged, into = "String", try_from = "String")]
pub enum VersionSpec {
    /// The continuously built nightly channel.
    Nightly,
    /// A fully-qualified semantic version.
    Version(Version),
}

impl VersionSpec {
    /// Parse the provided string into a resolved specification based
    /// on the following rules, in order:
    ///
    /// - If the value "nightly", map as `Nightly` variant.
    /// - Else parse with [`Version`] (a leading "v" is allowed), and map as `Version`.
    pub fn parse<T: AsRef<str>>(value: T) -> Result<Self, SpecError> {
        Self::from_str(value.as_ref())
    }

    /// Return true if the current specification is nightly.
    pub fn is_nightly(&self) -> bool {
        matches!(self, Self::Nightly)
    }

    /// Convert the current resolved specification to an unresolved specification.
    pub fn to_unresolved_spec(&self) -> UnresolvedVersionSpec {
        match self {
            Self::Nightly => UnresolvedVersionSpec::Nightly,
            Self::Version(version) => UnresolvedVersionSpec::Version(version.to_owned()),
        }
    }
}

impl FromStr for VersionSpec {
    type Err = SpecError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim() == NIGHTLY {
            return Ok(VersionSpec::Nightly);
        }

        let value = clean_version_string(value);

        Version::parse(&value)
            .map(VersionSpec::Version)
            .map_err(|error| SpecError::InvalidVersion {
                input: value,
                error,
            })
    }
}

impl TryFrom<String> for VersionSpec {
    type Error = SpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl Into<String> for VersionSpec {
    fn into(self) -> String {
        self.to_string()
    }
}

impl From<Version> for VersionSpec {
    fn from(version: Version) -> Self {
        Self::Version(version)
    }
}

impl Debug for VersionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Debug version as a string instead of a struct
        write!(f, "{self}")
    }
}

impl Display for VersionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nightly => write!(f, "{NIGHTLY}"),
            Self::Version(version) => write!(f, "{version}"),
        }
    }
}

impl PartialEq<&str> for VersionSpec {
    fn eq(&self, other: &&str) -> bool {
        match self {
            Self::Nightly => NIGHTLY == *other,
            Self::Version(version) => version.to_string() == *other,
        }
    }
}

impl PartialEq<Version> for VersionSpec {
    fn eq(&self, other: &Version) -> bool {
        match self {
            Self::Version(version) => version == other,
            _ => false,
        }
    }
}

impl AsRef<VersionSpec> for VersionSpec {
    fn as_ref(&self) -> &VersionSpec {
        self
    }
}
