use clap::{CommandFactory, Parser};
use ghdesk::cli::{Cli, Commands};
use ghdesk::commands::fetch;
use ghdesk::infra::github::GitHubClient;
use ghdesk::shared::config::load_config;
use ghdesk::shared::env_var::EnvVars;
use ghdesk::shared::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli { token, command } = Cli::parse();

    let env = EnvVars::load();
    let config = load_config()?;
    logging::init(&config.log, env.log.as_deref())?;

    let client = GitHubClient::new(&config.api)?;
    let token = env.resolve_token(token.as_deref());

    match command {
        Commands::Repos(cmd) => cmd.run(&client, &token).await?,
        Commands::Gists(cmd) => cmd.run(&client, &token).await?,
        Commands::Fetch(args) => fetch::run(&args, &client, &token).await?,
        Commands::Config(cmd) => cmd.run()?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "ghdesk", &mut std::io::stdout());
        }
    }

    Ok(())
}
