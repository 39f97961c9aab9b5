use crate::catalog::{VersionCatalog, load_catalog};
use crate::downloader::{download, get_download_path};
use crate::env::SetupEnvironment;
use crate::error::JuliaSetupError;
use crate::installer::{get_bin_dir, get_install_dir, install};
use crate::locator::locate_download_url;
use crate::platform::HostPlatform;
use crate::resolver::resolve_version;
use serde::Serialize;
use starbase_utils::fs;
use std::path::PathBuf;
use tracing::{debug, instrument};
use version_spec::VersionSpec;

/// A version resolved against the catalog, and where to download it from.
#[derive(Clone, Debug, Serialize)]
pub struct ResolvedRelease {
    pub version: VersionSpec,
    pub url: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Installation {
    pub version: VersionSpec,
    pub url: String,
    pub download_path: PathBuf,
    pub downloaded: bool,
    pub install_dir: PathBuf,
    pub bin_dir: PathBuf,
}

/// Runs the setup pipeline for one host platform: load the catalog,
/// resolve a constraint, locate the artifact, download, and install.
pub struct JuliaSetup<'env> {
    pub env: &'env SetupEnvironment,
    pub platform: HostPlatform,
}

impl<'env> JuliaSetup<'env> {
    pub fn new(env: &'env SetupEnvironment, platform: HostPlatform) -> Self {
        Self { env, platform }
    }

    pub async fn load_catalog(&self) -> Result<VersionCatalog, JuliaSetupError> {
        load_catalog(self.env).await
    }

    /// Resolve the constraint and locate its download, without installing.
    #[instrument(skip(self))]
    pub async fn resolve(&self, constraint: &str) -> Result<ResolvedRelease, JuliaSetupError> {
        let catalog = self.load_catalog().await?;

        self.resolve_with(&catalog, constraint)
    }

    pub fn resolve_with(
        &self,
        catalog: &VersionCatalog,
        constraint: &str,
    ) -> Result<ResolvedRelease, JuliaSetupError> {
        let version = resolve_version(catalog.keys(), constraint)?;
        let url = locate_download_url(catalog, &version, &self.platform, &self.env.nightly_url)?;

        Ok(ResolvedRelease { version, url })
    }

    #[instrument(skip(self))]
    pub async fn install(&self, constraint: &str) -> Result<Installation, JuliaSetupError> {
        let ResolvedRelease { version, url } = self.resolve(constraint).await?;

        let download_path = get_download_path(self.env, &version, &url);

        // Nightly downloads are always refreshed
        if version.is_nightly() && download_path.exists() {
            fs::remove_file(&download_path)?;
        }

        let downloaded = download(&url, &download_path).await?;

        let install_dir = get_install_dir(
            &self.env.get_install_root(self.platform.os),
            self.platform.os,
        );
        let install_dir = install(&download_path, &self.platform, &version, &install_dir).await?;

        debug!(
            version = version.to_string(),
            install_dir = ?install_dir,
            "Julia is ready",
        );

        Ok(Installation {
            bin_dir: get_bin_dir(&install_dir),
            version,
            url,
            download_path,
            downloaded,
            install_dir,
        })
    }
}
