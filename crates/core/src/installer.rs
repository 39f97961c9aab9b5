mod linux;
mod macos;
mod windows;

pub use linux::*;
pub use macos::*;
pub use windows::*;

use crate::error::JuliaSetupError;
use crate::platform::HostPlatform;
use crate::process::{exec_command_piped, handle_exec};
use std::path::{Path, PathBuf};
use system_env::SystemOS;
use tokio::process::Command;
use tracing::{debug, instrument};
use version_spec::VersionSpec;

/// Return the directory Julia is installed into under the install root.
pub fn get_install_dir(install_root: &Path, os: SystemOS) -> PathBuf {
    install_root.join(if os.is_windows() { "Julia" } else { "julia" })
}

pub fn get_bin_dir(install_dir: &Path) -> PathBuf {
    install_dir.join("bin")
}

/// Install the downloaded artifact into the install directory using the
/// procedure for the operating system, and return the install directory.
/// Partial installs are not rolled back.
#[instrument(skip(artifact, install_dir))]
pub async fn install(
    artifact: &Path,
    platform: &HostPlatform,
    resolved: &VersionSpec,
    install_dir: &Path,
) -> Result<PathBuf, JuliaSetupError> {
    if !artifact.exists() {
        return Err(JuliaSetupError::MissingDownload {
            path: artifact.to_path_buf(),
        });
    }

    debug!(
        artifact = ?artifact,
        install_dir = ?install_dir,
        "Installing Julia {}", resolved
    );

    match platform.os {
        SystemOS::Linux => install_tarball(artifact, install_dir)?,
        SystemOS::Windows => install_exe(artifact, resolved, install_dir).await?,
        SystemOS::MacOS => install_dmg(artifact, install_dir).await?,
        _ => {
            return Err(JuliaSetupError::UnsupportedPlatform {
                os: platform.os.to_string(),
                arch: platform.arch.to_string(),
            });
        }
    };

    debug!("Successfully installed Julia");

    Ok(install_dir.to_path_buf())
}

/// Run `julia --version` from the install's bin directory and return its output.
pub async fn get_installed_version(
    install_dir: &Path,
    os: SystemOS,
) -> Result<String, JuliaSetupError> {
    let exe = get_bin_dir(install_dir).join(os.get_exe_name("julia"));
    let result = handle_exec(exec_command_piped(Command::new(exe).arg("--version")).await?)?;

    Ok(result.stdout.trim().to_owned())
}
