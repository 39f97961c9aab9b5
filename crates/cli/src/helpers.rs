use crate::error::JuliaSetupCliError;
use serde::Serialize;
use starbase_utils::fs;
use std::path::Path;

/// Append a directory to the job runner's path file, so that later
/// steps of the job can find the binaries within.
pub fn append_to_path_file(path_file: &Path, dir: &Path) -> Result<(), JuliaSetupCliError> {
    fs::append_file(path_file, format!("{}\n", dir.display()))?;

    Ok(())
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, JuliaSetupCliError> {
    serde_json::to_string_pretty(value).map_err(|error| JuliaSetupCliError::JsonOutput {
        error: Box::new(error),
    })
}
