use crate::error::JuliaSetupError;
use crate::process::{exec_command, handle_exec};
use std::path::Path;
use tokio::process::Command;
use tracing::debug;
use version_spec::VersionSpec;

/// Flavor of the Windows installer. Releases up to and including every
/// 1.3 build (prereleases too) ship the legacy NSIS installer, while later
/// releases and nightly ship the Inno Setup installer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InstallerKind {
    Legacy,
    Modern,
}

pub fn select_windows_installer(resolved: &VersionSpec) -> InstallerKind {
    match resolved {
        VersionSpec::Nightly => InstallerKind::Modern,
        VersionSpec::Version(version) => {
            if (version.major, version.minor) >= (1, 4) {
                InstallerKind::Modern
            } else {
                InstallerKind::Legacy
            }
        }
    }
}

fn quote_powershell(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Create the command that silently runs the installer into the install
/// directory, and waits for it to exit.
pub fn create_windows_installer_command(
    kind: InstallerKind,
    exe: &Path,
    install_dir: &Path,
) -> Command {
    let dest = install_dir.to_string_lossy();
    let args = match kind {
        InstallerKind::Legacy => format!("/S /D={dest}"),
        InstallerKind::Modern => format!("/SILENT /dir={dest}"),
    };

    let mut command = Command::new("powershell");
    command.arg("-Command").arg(format!(
        "Start-Process -FilePath {} -ArgumentList {} -NoNewWindow -Wait",
        quote_powershell(&exe.to_string_lossy()),
        quote_powershell(&args),
    ));
    command
}

pub async fn install_exe(
    artifact: &Path,
    resolved: &VersionSpec,
    install_dir: &Path,
) -> Result<(), JuliaSetupError> {
    let kind = select_windows_installer(resolved);

    debug!(kind = ?kind, "Running Windows installer");

    handle_exec(
        exec_command(&mut create_windows_installer_command(
            kind,
            artifact,
            install_dir,
        ))
        .await?,
    )?;

    Ok(())
}
