use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env::consts;
use std::fmt;
use std::str::FromStr;

/// Architecture of the system environment.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemArch {
    #[serde(alias = "i386", alias = "i686")]
    X86,
    #[serde(alias = "x86_64", alias = "amd64")]
    X64,
    #[serde(alias = "armv7l")]
    Arm,
    #[serde(alias = "aarch64")]
    Arm64,
}

impl SystemArch {
    /// Return an instance derived from [`std::env::consts::ARCH`].
    pub fn from_env() -> Result<SystemArch, Error> {
        Self::from_str(consts::ARCH)
    }
}

impl FromStr for SystemArch {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(Value::String(value.trim().to_lowercase()))
            .map_err(|_| Error::UnknownArch(value.to_owned()))
    }
}

impl fmt::Display for SystemArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Operating system of the current environment.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemOS {
    FreeBSD,
    Linux,
    #[serde(alias = "mac", alias = "darwin")]
    MacOS,
    #[serde(alias = "win32")]
    Windows,
}

impl SystemOS {
    /// Return an instance derived from [`std::env::consts::OS`].
    pub fn from_env() -> Result<SystemOS, Error> {
        Self::from_str(consts::OS)
    }

    /// Return the provided name as a system formatted file name for executables.
    /// On Windows this will append an ".exe" extension. On Unix, no extension.
    pub fn get_exe_name(&self, name: impl AsRef<str>) -> String {
        let name = name.as_ref();

        if self.is_windows() && !name.ends_with(".exe") {
            format!("{name}.exe")
        } else {
            name.to_owned()
        }
    }

    /// Return true if Windows.
    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl FromStr for SystemOS {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(Value::String(value.trim().to_lowercase()))
            .map_err(|_| Error::UnknownOS(value.to_owned()))
    }
}

impl fmt::Display for SystemOS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}
