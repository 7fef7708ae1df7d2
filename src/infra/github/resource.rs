//! Follow-on resources addressed by absolute URL.
//!
//! GitHub responses link related resources (`commits_url`, `forks_url`,
//! a gist's `url`, ...); these are fetched as-is with the caller's token.

use super::ApiResponse;
use super::client::GitHubClient;
use super::error::Result;

#[async_trait::async_trait]
pub trait ResourceClient: Send + Sync {
    /// GET an arbitrary API URL and decode the body as JSON.
    async fn get_resource(&self, url: &str, token: &str) -> Result<ApiResponse>;
}

#[async_trait::async_trait]
impl ResourceClient for GitHubClient {
    async fn get_resource(&self, url: &str, token: &str) -> Result<ApiResponse> {
        self.get_json(url, token).await
    }
}
