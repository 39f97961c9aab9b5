use crate::error::JuliaSetupError;
use crate::process::{exec_command, handle_exec};
use starbase_utils::fs;
use std::path::Path;
use tokio::process::Command;

pub const MOUNTED_JULIA_DIR: &str = "/Volumes/Julia-*/Julia-*.app/Contents/Resources/julia";

pub fn create_attach_command(artifact: &Path) -> Command {
    let mut command = Command::new("hdiutil");
    command.arg("attach").arg(artifact);
    command
}

/// Copy the Julia tree out of the mounted volume. The volume is located
/// with a glob, so a missing or ambiguous mount fails the copy.
pub fn create_copy_command(install_dir: &Path) -> Command {
    let mut command = Command::new("/bin/bash");
    command.arg("-c").arg(format!(
        "cp -a {MOUNTED_JULIA_DIR}/. {}",
        shell_words::quote(&install_dir.to_string_lossy())
    ));
    command
}

pub async fn install_dmg(artifact: &Path, install_dir: &Path) -> Result<(), JuliaSetupError> {
    handle_exec(exec_command(&mut create_attach_command(artifact)).await?)?;

    fs::create_dir_all(install_dir)?;

    handle_exec(exec_command(&mut create_copy_command(install_dir)).await?)?;

    Ok(())
}
