use crate::helpers::append_to_path_file;
use crate::session::CliSession;
use clap::Args;
use julia_setup_core::JuliaSetup;
use julia_setup_core::installer::get_installed_version;
use starbase_styles::color;
use std::env;
use std::path::PathBuf;
use system_env::SystemArch;
use tracing::{debug, info};

#[derive(Args, Clone, Debug)]
pub struct InstallArgs {
    #[arg(
        required = true,
        env = "JULIA_SETUP_VERSION",
        help = "Version or requirement to install (1.9.4, ^1.6, 1, nightly)"
    )]
    pub spec: String,

    #[arg(long, env = "JULIA_SETUP_ARCH", help = "Architecture to install for")]
    pub arch: Option<SystemArch>,

    #[arg(
        long,
        env = "JULIA_SETUP_INSTALL_DIR",
        help = "Directory to install under (defaults to C:\\ on Windows, home directory elsewhere)"
    )]
    pub install_dir: Option<PathBuf>,

    #[arg(long, help = "Skip running `julia --version` after installing")]
    pub skip_version_check: bool,
}

pub async fn install(session: &CliSession, args: InstallArgs) -> miette::Result<()> {
    let platform = session.get_platform(args.arch);
    let mut env = session.env.clone();

    if args.install_dir.is_some() {
        env.install_root = args.install_dir;
    }

    info!(
        "Installing Julia {} for {}",
        color::hash(&args.spec),
        color::id(platform.to_string())
    );

    let installation = JuliaSetup::new(&env, platform).install(&args.spec).await?;

    info!(
        "Julia {} has been installed to {}",
        color::hash(installation.version.to_string()),
        color::path(&installation.install_dir),
    );

    println!("{}", installation.install_dir.display());
    println!("{}", installation.bin_dir.display());

    if let Some(path_file) = env::var_os("GITHUB_PATH") {
        debug!("Adding bin directory to GITHUB_PATH");

        append_to_path_file(&PathBuf::from(path_file), &installation.bin_dir)?;
    }

    if !args.skip_version_check {
        let output = get_installed_version(&installation.install_dir, platform.os).await?;

        info!("{output}");
    }

    Ok(())
}
