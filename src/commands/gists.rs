use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;

use super::repos::ListArgs;
use super::{output, require_token};
use crate::infra::github::{GistClient, NewGist};

/// Gist commands.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum GistsCommands {
    /// List public gists
    Public(ListArgs),

    /// List your gists
    Mine(ListArgs),

    /// Print the raw content behind a gist file URL
    Content {
        /// File URL, usually the `raw_url` of a gist file
        url: String,
    },

    /// Create a gist from local files
    Create {
        /// Gist description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Make the gist public (secret by default)
        #[arg(long)]
        public: bool,

        /// Files to upload; each is named after its base name
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

impl GistsCommands {
    pub async fn run(&self, client: &impl GistClient, token: &str) -> anyhow::Result<()> {
        print!("{}", self.render(client, token).await?);
        Ok(())
    }

    async fn render(&self, client: &impl GistClient, token: &str) -> anyhow::Result<String> {
        match self {
            Self::Public(args) => {
                let gists = client.list_public_gists().await?;
                render_list(&gists, args)
            }
            Self::Mine(args) => {
                let token = require_token(token)?;
                let gists = client.list_gists_for_authenticated_user(token).await?;
                render_list(&gists, args)
            }
            Self::Content { url } => Ok(client.get_gist_content(url, token).await?),
            Self::Create {
                description,
                public,
                files,
            } => {
                let token = require_token(token)?;
                let gist = read_gist(description, *public, files)?;
                let created = client.create_gist(&gist, token).await?;
                match created.get("html_url").and_then(|v| v.as_str()) {
                    Some(url) => Ok(format!("{url}\n")),
                    None => output::json(&created),
                }
            }
        }
    }
}

fn render_list(gists: &serde_json::Value, args: &ListArgs) -> anyhow::Result<String> {
    if args.json {
        output::json(gists)
    } else {
        output::gists(gists)
    }
}

/// Read local files into a gist payload.
fn read_gist(description: &str, public: bool, paths: &[PathBuf]) -> anyhow::Result<NewGist> {
    let files = paths
        .iter()
        .map(|path| {
            let name = file_name(path)?;
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((name, content))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(NewGist::from_contents(description, public, files))
}

fn file_name(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .with_context(|| format!("Invalid file name: {}", path.display()))
}
