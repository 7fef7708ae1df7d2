//! Repository listing operations.

use super::ApiResponse;
use super::client::GitHubClient;
use super::error::Result;

const PUBLIC_REPOSITORIES: &str = "/repositories";
const USER_PRIVATE_REPOSITORIES: &str = "/user/repos?type=private";

/// Trait for repository operations.
#[async_trait::async_trait]
pub trait RepoClient: Send + Sync {
    /// List public repositories, anonymously.
    async fn list_public_repositories(&self) -> Result<ApiResponse>;

    /// List the private repositories of the user owning `token`.
    async fn list_repositories_for_authenticated_user(&self, token: &str) -> Result<ApiResponse>;
}

#[async_trait::async_trait]
impl RepoClient for GitHubClient {
    async fn list_public_repositories(&self) -> Result<ApiResponse> {
        self.get_json(&self.endpoint(PUBLIC_REPOSITORIES), "").await
    }

    async fn list_repositories_for_authenticated_user(&self, token: &str) -> Result<ApiResponse> {
        self.get_json(&self.endpoint(USER_PRIVATE_REPOSITORIES), token)
            .await
    }
}
