use clap::{ArgAction, Parser, Subcommand};

use crate::cli::{extract, inner, list};

#[derive(Clone, Debug, Parser)]
#[command(
    name = "iconflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract drawable icons from Android packages as PNG",
    long_about = None,
    propagate_version = true
)]
pub struct App {
    /// More log output, repeat for more detail
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "x", name = "extract", about = "Write icons of a package to a directory")]
    Extract(extract::ExtractArg),
    #[command(alias = "ls", name = "list", about = "List the icon candidates of a package")]
    List(list::ListArg),
    #[command(name = "inner", about = "List the inner packages of a split package")]
    Inner(inner::InnerArg),
}

impl App {
    pub fn run(self) -> anyhow::Result<()> {
        match self.cmd {
            Commands::Extract(arg) => arg.run(),
            Commands::List(arg) => arg.run(),
            Commands::Inner(arg) => arg.run(),
        }
    }
}
