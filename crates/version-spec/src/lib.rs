mod resolved_spec;
mod spec_error;
mod unresolved_spec;

use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version;

pub use resolved_spec::*;
pub use spec_error::*;
pub use unresolved_spec::*;

/// The channel name for continuously built pre-releases.
pub const NIGHTLY: &str = "nightly";

static CLEAN_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"([><]=?)\s+(\d)").unwrap());

static CLEAN_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|[\s><=~^|,])[vV](\d)").unwrap());

static CLEAN_WILDCARD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[xX*]").unwrap());

static HYPHEN_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?<lower>[^\s]+)\s+-\s+(?<upper>[^\s]+)$").unwrap());

pub fn clean_version_string<T: AsRef<str>>(value: T) -> String {
    let value = value.as_ref().trim();

    // Remove a leading "v" or "V" from every version in the string.
    let value = CLEAN_PREFIX.replace_all(value, "$1$2");

    // Remove invalid space after <, <=, >, >=.
    CLEAN_VERSION.replace_all(&value, "$1$2").to_string()
}

/// Normalize a requirement string into a form [`semver::VersionReq`] understands:
/// wildcard suffixes are dropped, a bare `x` means any version, hyphen
/// ranges become inclusive bounds, and
/// whitespace separated comparators are joined with commas.
pub fn clean_version_req_string<T: AsRef<str>>(value: T) -> String {
    let value = CLEAN_WILDCARD.replace_all(value.as_ref().trim(), "");
    let value = value.trim();

    if let Some(caps) = HYPHEN_RANGE.captures(value) {
        return format!(">={}, <={}", &caps["lower"], &caps["upper"]);
    }

    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            if part.eq_ignore_ascii_case("x") {
                "*".to_owned()
            } else if part.starts_with(['=', '~', '^', '>', '<', '*']) {
                part.to_owned()
            } else if Version::parse(part).is_ok() {
                // A full version inside a range is an exact match
                format!("={part}")
            } else {
                // A partial version is an X-range: "1.6" means "1.6.x"
                format!("~{part}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a version string as it appears in a release catalog, where keys
/// may be prefixed with a "v" tag. Returns `None` for unparseable keys.
pub fn parse_catalog_version<T: AsRef<str>>(value: T) -> Option<Version> {
    Version::parse(&clean_version_string(value)).ok()
}
