use crate::cache::ToolCache;
use crate::catalog::DEFAULT_VERSIONS_URL;
use crate::error::JuliaSetupError;
use crate::helpers::{get_home_dir, get_setup_home};
use crate::locator::DEFAULT_NIGHTLY_URL;
use std::path::{Path, PathBuf};
use system_env::SystemOS;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct SetupEnvironment {
    pub root: PathBuf,       // ~/.julia-setup
    pub cache_dir: PathBuf,  // ~/.julia-setup/cache
    pub temp_dir: PathBuf,   // ~/.julia-setup/temp
    pub home_dir: PathBuf,   // ~
    pub install_root: Option<PathBuf>,
    pub versions_url: String,
    pub nightly_url: String,
}

impl SetupEnvironment {
    pub fn new() -> Result<Self, JuliaSetupError> {
        let home = get_home_dir()?;
        let root = get_setup_home(&home);

        Ok(Self::from(root, home))
    }

    pub fn new_testing(sandbox: &Path) -> Self {
        let mut env = Self::from(sandbox.join(".julia-setup"), sandbox.join(".home"));
        env.install_root = Some(sandbox.join(".install"));
        env
    }

    pub fn from<R: AsRef<Path>, H: AsRef<Path>>(root: R, home: H) -> Self {
        let root = root.as_ref();
        let home = home.as_ref();

        debug!(
            root = ?root,
            home = ?home,
            "Creating setup environment",
        );

        Self {
            root: root.to_path_buf(),
            cache_dir: root.join("cache"),
            temp_dir: root.join("temp"),
            home_dir: home.to_path_buf(),
            install_root: None,
            versions_url: DEFAULT_VERSIONS_URL.to_owned(),
            nightly_url: DEFAULT_NIGHTLY_URL.to_owned(),
        }
    }

    pub fn get_tool_cache(&self) -> ToolCache {
        ToolCache::new(&self.cache_dir)
    }

    /// Return the directory installations are placed under: the configured
    /// install root, else `C:\` on Windows and the home directory elsewhere.
    pub fn get_install_root(&self, os: SystemOS) -> PathBuf {
        if let Some(root) = &self.install_root {
            return root.to_owned();
        }

        if os.is_windows() {
            PathBuf::from("C:\\")
        } else {
            self.home_dir.clone()
        }
    }
}
