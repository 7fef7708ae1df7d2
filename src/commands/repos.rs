use clap::{Args, Subcommand};

use super::{output, require_token};
use crate::infra::github::RepoClient;

/// Repository commands.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ReposCommands {
    /// List public repositories
    Public(ListArgs),

    /// List your private repositories
    Mine(ListArgs),
}

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ListArgs {
    /// Print the raw JSON response instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ReposCommands {
    pub async fn run(&self, client: &impl RepoClient, token: &str) -> anyhow::Result<()> {
        print!("{}", self.render(client, token).await?);
        Ok(())
    }

    async fn render(&self, client: &impl RepoClient, token: &str) -> anyhow::Result<String> {
        let (repos, args) = match self {
            Self::Public(args) => (client.list_public_repositories().await?, args),
            Self::Mine(args) => {
                let token = require_token(token)?;
                (
                    client.list_repositories_for_authenticated_user(token).await?,
                    args,
                )
            }
        };

        if args.json {
            output::json(&repos)
        } else {
            output::repositories(&repos)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::github::mock::{GitHubMockServer, mock_repository};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[tokio::test]
    async fn public_lists_repositories(#[values(false, true)] as_json: bool) {
        let mock = GitHubMockServer::start().await;
        mock.endpoint("GET", "/repositories")
            .respond_json(json!([mock_repository(1, "octo/hello", false, Some("Hi"))]))
            .await;

        let cmd = ReposCommands::Public(ListArgs { json: as_json });
        let output = cmd.render(&mock.client(), "").await.unwrap();

        assert!(output.contains("octo/hello"));
        assert_eq!(output.contains("\"full_name\""), as_json);
    }

    #[tokio::test]
    async fn mine_sends_token() {
        let mock = GitHubMockServer::start().await;
        mock.endpoint("GET", "/user/repos")
            .query("type", "private")
            .expect_token("tok")
            .respond_json(json!([mock_repository(3, "me/private", true, None)]))
            .await;

        let cmd = ReposCommands::Mine(ListArgs { json: false });
        let output = cmd.render(&mock.client(), "tok").await.unwrap();

        assert!(output.contains("me/private"));
        assert!(output.contains("private"));
    }

    #[tokio::test]
    async fn mine_without_token_makes_no_request() {
        let mock = GitHubMockServer::start().await;

        let cmd = ReposCommands::Mine(ListArgs { json: false });
        let result = cmd.render(&mock.client(), "").await;

        assert!(result.is_err());
        assert!(mock.received_requests().await.is_empty());
    }
}
