use crate::commands::{InstallArgs, ListRemoteArgs, ResolveArgs};
use clap::builder::styling::{Color, Style, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use starbase_styles::color::Color as ColorType;
use std::fmt::{Display, Error, Formatter};

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "{}",
            match self {
                LogLevel::Off => "off",
                LogLevel::Error => "error",
                LogLevel::Warn => "warn",
                LogLevel::Info => "info",
                LogLevel::Debug => "debug",
                LogLevel::Trace => "trace",
            }
        )?;

        Ok(())
    }
}

fn fg(ty: ColorType) -> Style {
    Style::new().fg_color(Some(Color::from(ty as u8)))
}

fn create_styles() -> Styles {
    Styles::default()
        .error(fg(ColorType::Red))
        .header(Style::new().bold())
        .invalid(fg(ColorType::Yellow))
        .literal(fg(ColorType::Pink)) // args, options, etc
        .placeholder(fg(ColorType::GrayLight))
        .usage(fg(ColorType::Purple).bold())
        .valid(fg(ColorType::Green))
}

#[derive(Debug, Parser)]
#[command(
    name = "julia-setup",
    version,
    about,
    long_about = None,
    disable_help_subcommand = true,
    propagate_version = true,
    next_line_help = false,
    styles = create_styles()
)]
pub struct App {
    #[arg(
        value_enum,
        long,
        global = true,
        env = "JULIA_SETUP_LOG",
        help = "Lowest log level to output"
    )]
    pub log: Option<LogLevel>,

    #[arg(
        long,
        global = true,
        env = "JULIA_SETUP_VERSIONS_URL",
        help = "URL of the versions.json release catalog"
    )]
    pub versions_url: Option<String>,

    #[arg(
        long,
        global = true,
        env = "JULIA_SETUP_NIGHTLY_URL",
        help = "Base URL that nightly builds are downloaded from"
    )]
    pub nightly_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(
        alias = "i",
        name = "install",
        about = "Download and install Julia.",
        long_about = "Resolve a version or requirement against the release catalog, then download and install the matching Julia build for this machine."
    )]
    Install(InstallArgs),

    #[command(
        alias = "lsr",
        name = "list-remote",
        about = "List versions available in the release catalog."
    )]
    ListRemote(ListRemoteArgs),

    #[command(
        name = "resolve",
        about = "Resolve a version and its download URL, without installing."
    )]
    Resolve(ResolveArgs),
}
