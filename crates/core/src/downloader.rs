use crate::env::SetupEnvironment;
use crate::error::JuliaSetupError;
use crate::helpers::extract_filename_from_url;
use starbase_styles::color;
use starbase_utils::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use version_spec::VersionSpec;

/// Return the path an artifact for the version is downloaded to:
/// `{temp_dir}/{version}-{file name}`. The file may not exist yet.
pub fn get_download_path(env: &SetupEnvironment, version: &VersionSpec, url: &str) -> PathBuf {
    env.temp_dir
        .join(format!("{version}-{}", extract_filename_from_url(url)))
}

/// Download the URL to the file, unless the file already exists from a
/// previous run. Returns true if a download happened.
pub async fn download(url: &str, to_file: &Path) -> Result<bool, JuliaSetupError> {
    if to_file.exists() {
        debug!(file = ?to_file, "Artifact already downloaded, continuing");

        return Ok(false);
    }

    download_from_url(url, to_file).await?;

    debug!("Successfully downloaded artifact");

    Ok(true)
}

#[instrument(skip_all)]
pub async fn download_from_url<U, F>(url: U, dest_file: F) -> Result<(), JuliaSetupError>
where
    U: AsRef<str>,
    F: AsRef<Path>,
{
    let url = url.as_ref();
    let dest_file = dest_file.as_ref();
    let handle_http_error = |error: reqwest::Error| JuliaSetupError::Http {
        url: url.to_owned(),
        error: Box::new(error),
    };

    debug!(
        dest_file = ?dest_file,
        "Downloading file from {}",
        color::url(url),
    );

    let response = reqwest::get(url).await.map_err(handle_http_error)?;
    let status = response.status();

    if status.as_u16() == 404 {
        return Err(JuliaSetupError::DownloadNotFound {
            url: url.to_owned(),
        });
    }

    if !status.is_success() {
        return Err(JuliaSetupError::DownloadFailed {
            url: url.to_owned(),
            status: status.to_string(),
        });
    }

    let bytes = response.bytes().await.map_err(handle_http_error)?;

    // Only complete downloads may exist at the destination path
    let part_file = dest_file.with_extension("part");

    fs::write_file(&part_file, &bytes)?;
    fs::rename(&part_file, dest_file)?;

    Ok(())
}
