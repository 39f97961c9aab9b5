use crate::helpers::to_json;
use crate::session::CliSession;
use clap::Args;
use julia_setup_core::JuliaSetup;
use system_env::SystemArch;

#[derive(Args, Clone, Debug)]
pub struct ResolveArgs {
    #[arg(
        required = true,
        env = "JULIA_SETUP_VERSION",
        help = "Version or requirement to resolve"
    )]
    pub spec: String,

    #[arg(long, env = "JULIA_SETUP_ARCH", help = "Architecture to resolve for")]
    pub arch: Option<SystemArch>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,
}

pub async fn resolve(session: &CliSession, args: ResolveArgs) -> miette::Result<()> {
    let platform = session.get_platform(args.arch);
    let release = JuliaSetup::new(&session.env, platform)
        .resolve(&args.spec)
        .await?;

    if args.json {
        println!("{}", to_json(&release)?);
    } else {
        println!("{}", release.version);
        println!("{}", release.url);
    }

    Ok(())
}
