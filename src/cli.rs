use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::config::ConfigCommands;
use crate::commands::fetch::FetchArgs;
use crate::commands::gists::GistsCommands;
use crate::commands::repos::ReposCommands;

#[derive(Parser)]
#[command(
    name = "ghdesk",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// GitHub token (default: GHDESK_TOKEN, then GITHUB_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Repository listings
    #[command(subcommand)]
    Repos(ReposCommands),

    /// Gist listings, content and creation
    #[command(subcommand)]
    Gists(GistsCommands),

    /// Fetch any API URL and print the JSON response
    Fetch(FetchArgs),

    /// Configuration file tools
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
