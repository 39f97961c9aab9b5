use crate::app::App;
use julia_setup_core::{HostPlatform, SetupEnvironment};
use system_env::SystemArch;
use tracing::debug;

/// Settings shared by every command, derived from global arguments
/// and the host environment.
pub struct CliSession {
    pub env: SetupEnvironment,
    pub host: HostPlatform,
}

impl CliSession {
    pub fn new(app: &App) -> miette::Result<Self> {
        let mut env = SetupEnvironment::new()?;

        if let Some(url) = &app.versions_url {
            env.versions_url = url.to_owned();
        }

        if let Some(url) = &app.nightly_url {
            env.nightly_url = url.to_owned();
        }

        let host = HostPlatform::from_env()?;

        debug!(host = host.to_string(), root = ?env.root, "Created session");

        Ok(Self { env, host })
    }

    /// Return the platform to install for, with the architecture overridden if requested.
    pub fn get_platform(&self, arch: Option<SystemArch>) -> HostPlatform {
        match arch {
            Some(arch) => self.host.with_arch(arch),
            None => self.host,
        }
    }
}
