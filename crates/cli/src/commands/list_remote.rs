use crate::helpers::to_json;
use crate::session::CliSession;
use clap::Args;
use julia_setup_core::load_catalog;
use std::io::{self, Write};
use tracing::debug;

#[derive(Args, Clone, Debug)]
pub struct ListRemoteArgs {
    #[arg(long, help = "Only list releases marked as stable")]
    pub stable: bool,

    #[arg(long, help = "Print the versions as JSON")]
    pub json: bool,
}

pub async fn list_remote(session: &CliSession, args: ListRemoteArgs) -> miette::Result<()> {
    let catalog = load_catalog(&session.env).await?;
    let versions = catalog.versions(args.stable);

    debug!(count = versions.len(), "Listing available versions");

    if args.json {
        println!("{}", to_json(&versions)?);

        return Ok(());
    }

    let mut handle = io::BufWriter::new(io::stdout());

    for version in versions {
        // Broken pipes (piping into `head`) end the listing early
        if writeln!(handle, "{version}").is_err() {
            break;
        }
    }

    let _ = handle.flush();

    Ok(())
}
