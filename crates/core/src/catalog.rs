use crate::downloader::download_from_url;
use crate::env::SetupEnvironment;
use crate::error::JuliaSetupError;
use semver::Version;
use serde::{Deserialize, Serialize};
use starbase_styles::color;
use starbase_utils::fs;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, instrument};
use version_spec::parse_catalog_version;

pub const DEFAULT_VERSIONS_URL: &str = "https://julialang-s3.julialang.org/bin/versions.json";

pub const CATALOG_CACHE_KEY: &str = "julia-versions";
pub const CATALOG_CACHE_VERSION: &str = "latest";
pub const CATALOG_FILE_NAME: &str = "versions.json";

/// A downloadable artifact of a release. The `os` and `arch` fields use
/// the catalog's naming (`winnt`, `x86_64`, ...).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FileEntry {
    pub os: String,
    pub arch: String,
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triplet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Release {
    pub files: Vec<FileEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stable: Option<bool>,
}

impl Release {
    pub fn is_stable(&self) -> bool {
        self.stable.unwrap_or(false)
    }
}

/// Mapping of version keys to release records, as published in `versions.json`.
/// Keys are not guaranteed to be sorted, and may carry a "v" prefix.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VersionCatalog {
    pub releases: BTreeMap<String, Release>,
}

impl VersionCatalog {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn load_from(path: &Path) -> Result<Self, JuliaSetupError> {
        let content = fs::read_file(path)?;

        Self::from_json(&content).map_err(|error| JuliaSetupError::InvalidCatalog {
            path: path.to_path_buf(),
            error: Box::new(error),
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.releases.keys().map(|key| key.as_str())
    }

    /// Return the release for the version, whether keyed with a "v" prefix or not.
    pub fn get_release(&self, version: &Version) -> Option<&Release> {
        if let Some(release) = self.releases.get(&version.to_string()) {
            return Some(release);
        }

        self.releases
            .iter()
            .find(|(key, _)| parse_catalog_version(key).is_some_and(|v| &v == version))
            .map(|(_, release)| release)
    }

    /// Return all parseable versions, newest first.
    pub fn versions(&self, stable_only: bool) -> Vec<Version> {
        let mut versions = self
            .releases
            .iter()
            .filter(|(_, release)| !stable_only || release.is_stable())
            .filter_map(|(key, _)| parse_catalog_version(key))
            .collect::<Vec<_>>();

        versions.sort_by(|a, b| b.cmp(a));
        versions.dedup();
        versions
    }
}

/// Load the version catalog, preferring the on-disk cache. When not cached,
/// the catalog is downloaded into the temp directory and stored in the cache.
#[instrument(skip_all)]
pub async fn load_catalog(env: &SetupEnvironment) -> Result<VersionCatalog, JuliaSetupError> {
    let cache = env.get_tool_cache();

    let path = match cache.find_file(CATALOG_CACHE_KEY, CATALOG_CACHE_VERSION, CATALOG_FILE_NAME)
    {
        Some(path) => {
            debug!(path = ?path, "Using cached version catalog");

            path
        }
        None => {
            debug!(
                "Version catalog not cached, downloading from {}",
                color::url(&env.versions_url)
            );

            let temp_file = env.temp_dir.join(CATALOG_FILE_NAME);

            download_from_url(&env.versions_url, &temp_file).await?;

            cache.cache_file(
                &temp_file,
                CATALOG_FILE_NAME,
                CATALOG_CACHE_KEY,
                CATALOG_CACHE_VERSION,
            )?
        }
    };

    let catalog = VersionCatalog::load_from(&path)?;

    debug!(releases = catalog.releases.len(), "Loaded version catalog");

    Ok(catalog)
}
