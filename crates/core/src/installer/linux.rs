use crate::error::JuliaSetupError;
use flate2::read::GzDecoder;
use starbase_utils::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tar::Archive;
use tracing::{debug, instrument};

/// Unpack a `.tar.gz` archive into the output directory, removing the
/// archive's top-level directory from every entry.
#[instrument(skip_all)]
pub fn unpack_tarball(input_file: &Path, output_dir: &Path) -> Result<(), JuliaSetupError> {
    let handle_input_error = |error: io::Error| JuliaSetupError::UnpackFailed {
        path: input_file.to_path_buf(),
        error: Box::new(error),
    };

    debug!(
        input_file = ?input_file,
        output_dir = ?output_dir,
        "Unpacking tar archive",
    );

    fs::create_dir_all(output_dir)?;

    let mut archive = Archive::new(GzDecoder::new(fs::open_file(input_file)?));

    for entry_result in archive.entries().map_err(handle_input_error)? {
        let mut entry = entry_result.map_err(handle_input_error)?;
        let path = entry.path().map_err(handle_input_error)?.into_owned();

        let Some(rel_path) = strip_first_component(&path) else {
            continue;
        };

        let output_path = output_dir.join(rel_path);

        if let Some(parent_dir) = output_path.parent() {
            fs::create_dir_all(parent_dir)?;
        }

        entry.unpack(&output_path).map_err(handle_input_error)?;
    }

    Ok(())
}

/// Drop the leading component of an archive path. Returns `None` for the
/// top-level entry itself, and for paths that escape the output directory.
fn strip_first_component(path: &Path) -> Option<PathBuf> {
    let mut components = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir));

    components.next()?;

    let mut rel_path = PathBuf::new();

    for component in components {
        match component {
            Component::Normal(part) => rel_path.push(part),
            _ => return None,
        };
    }

    if rel_path.as_os_str().is_empty() {
        None
    } else {
        Some(rel_path)
    }
}

pub fn install_tarball(artifact: &Path, install_dir: &Path) -> Result<(), JuliaSetupError> {
    unpack_tarball(artifact, install_dir)
}
