use crate::error::JuliaSetupError;
use semver::Version;
use tracing::{debug, instrument};
use version_spec::{UnresolvedVersionSpec, VersionSpec, parse_catalog_version};

/// Return the highest catalog version that satisfies the requirement.
/// Keys that are not valid versions are skipped.
pub fn match_highest_version<I, K>(spec: &UnresolvedVersionSpec, keys: I) -> Option<Version>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    keys.into_iter()
        .filter_map(parse_catalog_version)
        .filter(|version| spec.matches(version))
        .max()
}

/// Resolve a user constraint to a single version, in order:
///
/// - An exact semantic version is returned as-is, without checking
///   that it exists in the catalog.
/// - `nightly` is returned as-is.
/// - Otherwise the constraint is a range, and the highest matching
///   catalog key is selected.
#[instrument(skip(keys))]
pub fn resolve_version<I, K>(keys: I, constraint: &str) -> Result<VersionSpec, JuliaSetupError>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let spec = UnresolvedVersionSpec::parse(constraint).map_err(|error| {
        JuliaSetupError::InvalidConstraint {
            input: constraint.to_owned(),
            error: Box::new(error),
        }
    })?;

    if let Some(version) = spec.to_resolved_spec() {
        debug!(
            version = version.to_string(),
            "Resolved to {} (without validation)", version
        );

        return Ok(version);
    }

    let version = match_highest_version(&spec, keys).ok_or_else(|| {
        JuliaSetupError::NoMatchingVersion {
            constraint: constraint.to_owned(),
        }
    })?;

    debug!(
        version = version.to_string(),
        "Resolved {} to {}", spec, version
    );

    Ok(VersionSpec::Version(version))
}
