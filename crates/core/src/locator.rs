use crate::catalog::{FileEntry, Release, VersionCatalog};
use crate::error::JuliaSetupError;
use crate::platform::{HostPlatform, from_catalog_arch, from_catalog_os};
use starbase_styles::color;
use system_env::{SystemArch, SystemOS};
use tracing::{debug, instrument, trace};
use version_spec::VersionSpec;

pub const DEFAULT_NIGHTLY_URL: &str = "https://julialangnightlies-s3.julialang.org/bin";

/// Return the file name of the latest nightly build for the platform.
pub fn get_nightly_file_name(platform: &HostPlatform) -> Result<&'static str, JuliaSetupError> {
    let unsupported = || JuliaSetupError::UnsupportedPlatform {
        os: platform.os.to_string(),
        arch: platform.arch.to_string(),
    };

    match (platform.os, platform.arch) {
        (SystemOS::Windows, SystemArch::X64) => Ok("julia-latest-win64.exe"),
        (SystemOS::Windows, _) => Ok("julia-latest-win32.exe"),
        (SystemOS::MacOS, SystemArch::X86) => Err(unsupported()),
        (SystemOS::MacOS, _) => Ok("julia-latest-mac64.dmg"),
        (SystemOS::Linux, SystemArch::X64) => Ok("julia-latest-linux64.tar.gz"),
        (SystemOS::Linux, _) => Ok("julia-latest-linux32.tar.gz"),
        _ => Err(unsupported()),
    }
}

/// Return the nightly URL: `{base}/{catalog os}/{host arch}/{file}`.
pub fn get_nightly_url(base: &str, platform: &HostPlatform) -> Result<String, JuliaSetupError> {
    let file = get_nightly_file_name(platform)?;

    Ok(format!(
        "{}/{}/{}/{file}",
        base.trim_end_matches('/'),
        platform.catalog_os()?,
        platform.arch,
    ))
}

fn is_built_for(file: &FileEntry, platform: &HostPlatform) -> bool {
    match (from_catalog_os(&file.os), from_catalog_arch(&file.arch)) {
        (Ok(os), Ok(arch)) => os == platform.os && arch == platform.arch,
        _ => {
            trace!(
                os = file.os.as_str(),
                arch = file.arch.as_str(),
                "Skipping file built for an unknown platform"
            );

            false
        }
    }
}

/// Return the first file of the release built for the platform.
/// Files for platforms without a host equivalent never match.
pub fn find_file_entry<'release>(
    release: &'release Release,
    platform: &HostPlatform,
) -> Result<Option<&'release FileEntry>, JuliaSetupError> {
    let os = platform.catalog_os()?;

    trace!(
        os,
        arch = platform.catalog_arch(),
        "Searching {} release files",
        release.files.len()
    );

    Ok(release
        .files
        .iter()
        .find(|file| is_built_for(file, platform)))
}

/// Derive the download URL of the resolved version for the platform.
/// Stable versions are looked up in the catalog, while nightly
/// builds live at a fixed location.
#[instrument(skip(catalog, nightly_base))]
pub fn locate_download_url(
    catalog: &VersionCatalog,
    resolved: &VersionSpec,
    platform: &HostPlatform,
    nightly_base: &str,
) -> Result<String, JuliaSetupError> {
    let no_binaries = || JuliaSetupError::NoMatchingBinaries {
        arch: platform.arch.to_string(),
        version: resolved.to_string(),
    };

    let url = match resolved {
        VersionSpec::Nightly => get_nightly_url(nightly_base, platform)?,
        VersionSpec::Version(version) => {
            let release = catalog.get_release(version).ok_or_else(no_binaries)?;

            find_file_entry(release, platform)?
                .ok_or_else(no_binaries)?
                .url
                .clone()
        }
    };

    debug!(
        version = resolved.to_string(),
        "Located download {}",
        color::url(&url)
    );

    Ok(url)
}
