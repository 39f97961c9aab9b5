use crate::error::JuliaSetupError;
use std::env;
use std::path::{Path, PathBuf};

pub fn get_home_dir() -> Result<PathBuf, JuliaSetupError> {
    dirs::home_dir().ok_or(JuliaSetupError::MissingHomeDir)
}

/// Return the root directory for caches and downloads. Can be overridden
/// with `JULIA_SETUP_HOME`, where a leading `~` expands to the home dir.
pub fn get_setup_home(home: &Path) -> PathBuf {
    let root = match env::var("JULIA_SETUP_HOME") {
        Ok(root) if !root.is_empty() => PathBuf::from(root),
        _ => return home.join(".julia-setup"),
    };

    match root.strip_prefix("~") {
        Ok(rel_root) => home.join(rel_root),
        Err(_) => root,
    }
}

/// Extract the trailing file name from a URL, ignoring any query or fragment.
pub fn extract_filename_from_url<U: AsRef<str>>(url: U) -> String {
    let url = url.as_ref();
    let path = url.split(['?', '#']).next().unwrap_or(url);

    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
        .to_owned()
}
