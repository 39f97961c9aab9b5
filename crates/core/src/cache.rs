use crate::error::JuliaSetupError;
use starbase_utils::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// A keyed file cache on disk, laid out as `{dir}/{key}/{version}/{file}`.
/// Entries never expire.
#[derive(Clone, Debug)]
pub struct ToolCache {
    pub dir: PathBuf,
}

impl ToolCache {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn get_dir(&self, key: &str, version: &str) -> PathBuf {
        self.dir.join(key).join(version)
    }

    /// Return the cached directory for the key and version, if it exists.
    pub fn find(&self, key: &str, version: &str) -> Option<PathBuf> {
        let dir = self.get_dir(key, version);

        if dir.is_dir() { Some(dir) } else { None }
    }

    /// Return the cached file for the key and version, if it exists.
    pub fn find_file(&self, key: &str, version: &str, file_name: &str) -> Option<PathBuf> {
        let file = self.find(key, version)?.join(file_name);

        if file.is_file() { Some(file) } else { None }
    }

    /// Copy the source file into the cache and return the cached path.
    #[instrument(skip(self))]
    pub fn cache_file(
        &self,
        source: &Path,
        file_name: &str,
        key: &str,
        version: &str,
    ) -> Result<PathBuf, JuliaSetupError> {
        let dir = self.get_dir(key, version);
        let dest = dir.join(file_name);

        debug!(
            source = ?source,
            dest = ?dest,
            "Caching file",
        );

        fs::create_dir_all(&dir)?;
        fs::copy_file(source, &dest)?;

        Ok(dest)
    }
}
