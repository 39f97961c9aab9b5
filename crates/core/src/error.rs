use crate::process::ProcessError;
use miette::Diagnostic;
use starbase_styles::{Style, Stylize};
use starbase_utils::fs::FsError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum JuliaSetupError {
    #[diagnostic(transparent)]
    #[error(transparent)]
    Fs(#[from] Box<FsError>),

    #[diagnostic(transparent)]
    #[error(transparent)]
    Process(#[from] Box<ProcessError>),

    #[diagnostic(code(julia_setup::env::home_dir))]
    #[error("Unable to determine your home directory.")]
    MissingHomeDir,

    #[diagnostic(code(julia_setup::env::host))]
    #[error("Unable to detect the host operating system or architecture.")]
    UnknownHost {
        #[source]
        error: Box<system_env::Error>,
    },

    #[diagnostic(code(julia_setup::catalog::parse_failed))]
    #[error("Failed to parse version catalog {}.", .path.style(Style::Path))]
    InvalidCatalog {
        path: PathBuf,
        #[source]
        error: Box<serde_json::Error>,
    },

    #[diagnostic(code(julia_setup::resolve::invalid_constraint))]
    #[error("Invalid version or requirement {}.", .input.style(Style::Hash))]
    InvalidConstraint {
        input: String,
        #[source]
        error: Box<version_spec::SpecError>,
    },

    #[diagnostic(
        code(julia_setup::resolve::no_match),
        help = "Run `julia-setup list-remote` to see available versions."
    )]
    #[error("No Julia version matches {}.", .constraint.style(Style::Hash))]
    NoMatchingVersion { constraint: String },

    #[diagnostic(code(julia_setup::locate::no_binaries))]
    #[error(
        "Could not find Julia {} binaries for {}.",
        .version.style(Style::Hash),
        .arch.style(Style::Label),
    )]
    NoMatchingBinaries { arch: String, version: String },

    #[diagnostic(code(julia_setup::platform::unsupported))]
    #[error(
        "Platform {} with architecture {} is not supported.",
        .os.style(Style::Label),
        .arch.style(Style::Label),
    )]
    UnsupportedPlatform { os: String, arch: String },

    #[diagnostic(code(julia_setup::platform::unsupported_arch))]
    #[error("Architecture {} is not supported.", .arch.style(Style::Label))]
    UnsupportedArchitecture { arch: String },

    #[diagnostic(
        code(julia_setup::download::missing),
        help = "This version may not be published for your operating system or architecture."
    )]
    #[error("Download {} does not exist.", .url.style(Style::Url))]
    DownloadNotFound { url: String },

    #[diagnostic(code(julia_setup::download::failed))]
    #[error("Failed to download from {}: {status}", .url.style(Style::Url))]
    DownloadFailed { url: String, status: String },

    #[diagnostic(code(julia_setup::http))]
    #[error("Failure for {}.", .url.style(Style::Url))]
    Http {
        url: String,
        #[source]
        error: Box<reqwest::Error>,
    },

    #[diagnostic(code(julia_setup::install::unpack_failed))]
    #[error("Failed to unpack archive {}.", .path.style(Style::Path))]
    UnpackFailed {
        path: PathBuf,
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(code(julia_setup::install::missing_download))]
    #[error("Unable to install, download {} is missing.", .path.style(Style::Path))]
    MissingDownload { path: PathBuf },
}

impl From<FsError> for JuliaSetupError {
    fn from(e: FsError) -> JuliaSetupError {
        JuliaSetupError::Fs(Box::new(e))
    }
}

impl From<ProcessError> for JuliaSetupError {
    fn from(e: ProcessError) -> JuliaSetupError {
        JuliaSetupError::Process(Box::new(e))
    }
}
