use crate::error::JuliaSetupError;
use serde::Serialize;
use std::fmt;
use system_env::{SystemArch, SystemOS};

/// The operating system and architecture being installed for. Detected
/// once at startup, and passed to each step explicitly.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct HostPlatform {
    pub os: SystemOS,
    pub arch: SystemArch,
}

impl HostPlatform {
    pub fn new(os: SystemOS, arch: SystemArch) -> Self {
        Self { os, arch }
    }

    pub fn from_env() -> Result<Self, JuliaSetupError> {
        let map_error = |error: system_env::Error| JuliaSetupError::UnknownHost {
            error: Box::new(error),
        };

        Ok(Self {
            os: SystemOS::from_env().map_err(map_error)?,
            arch: SystemArch::from_env().map_err(map_error)?,
        })
    }

    /// Replace the architecture, keeping the operating system.
    pub fn with_arch(mut self, arch: SystemArch) -> Self {
        self.arch = arch;
        self
    }

    pub fn catalog_os(&self) -> Result<&'static str, JuliaSetupError> {
        to_catalog_os(self.os).ok_or_else(|| JuliaSetupError::UnsupportedPlatform {
            os: self.os.to_string(),
            arch: self.arch.to_string(),
        })
    }

    pub fn catalog_arch(&self) -> &'static str {
        to_catalog_arch(self.arch)
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

// Host <-> catalog vocabulary

pub fn to_catalog_os(os: SystemOS) -> Option<&'static str> {
    match os {
        SystemOS::Windows => Some("winnt"),
        SystemOS::MacOS => Some("mac"),
        SystemOS::Linux => Some("linux"),
        SystemOS::FreeBSD => None,
    }
}

pub fn to_catalog_arch(arch: SystemArch) -> &'static str {
    match arch {
        SystemArch::X64 => "x86_64",
        SystemArch::X86 => "i686",
        SystemArch::Arm64 => "aarch64",
        SystemArch::Arm => "armv7l",
    }
}

pub fn from_catalog_os(value: &str) -> Result<SystemOS, JuliaSetupError> {
    match value {
        "winnt" => Ok(SystemOS::Windows),
        "mac" => Ok(SystemOS::MacOS),
        "linux" => Ok(SystemOS::Linux),
        other => Err(JuliaSetupError::UnsupportedPlatform {
            os: other.to_owned(),
            arch: "unknown".into(),
        }),
    }
}

pub fn from_catalog_arch(value: &str) -> Result<SystemArch, JuliaSetupError> {
    match value {
        "x86_64" => Ok(SystemArch::X64),
        "i686" => Ok(SystemArch::X86),
        "aarch64" => Ok(SystemArch::Arm64),
        "armv7l" => Ok(SystemArch::Arm),
        other => Err(JuliaSetupError::UnsupportedArchitecture {
            arch: other.to_owned(),
        }),
    }
}
