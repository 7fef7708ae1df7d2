//! wiremock-based GitHub mock server for testing.
//!
//! Provides `GitHubMockServer` for HTTP-level mocking of GitHub API calls.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//!
//! mock.endpoint("GET", "/repositories").respond_json(json!([])).await;
//! mock.endpoint("GET", "/user/repos")
//!     .query("type", "private")
//!     .expect_token("tok")
//!     .respond_json(json!([mock_repository(1, "octo/a", true, None)]))
//!     .await;
//! mock.endpoint("POST", "/gists").status(201).respond_json(mock_gist("id", "d", &["a.txt"])).await;
//! mock.endpoint("GET", "/raw/a.txt").respond_raw("not json").await;
//!
//! let client = mock.client();
//! ```

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use super::client::GitHubClient;

/// Create a mock repository JSON object.
pub fn mock_repository(
    id: u64,
    full_name: &str,
    is_private: bool,
    description: Option<&str>,
) -> serde_json::Value {
    let name = full_name.rsplit('/').next().unwrap_or(full_name);
    json!({
        "id": id,
        "node_id": "R_test",
        "name": name,
        "full_name": full_name,
        "private": is_private,
        "html_url": format!("https://github.com/{}", full_name),
        "description": description,
        "fork": false,
        "url": format!("https://api.github.com/repos/{}", full_name),
        "languages_url": format!("https://api.github.com/repos/{}/languages", full_name)
    })
}

/// Create a mock gist JSON object with one entry per file name.
pub fn mock_gist(id: &str, description: &str, files: &[&str]) -> serde_json::Value {
    let files: serde_json::Map<String, serde_json::Value> = files
        .iter()
        .map(|name| {
            (
                name.to_string(),
                json!({
                    "filename": name,
                    "type": "text/plain",
                    "raw_url": format!("https://gist.githubusercontent.com/octo/{}/raw/{}", id, name),
                    "size": 1
                }),
            )
        })
        .collect();
    json!({
        "id": id,
        "url": format!("https://api.github.com/gists/{}", id),
        "html_url": format!("https://gist.github.com/{}", id),
        "description": description,
        "public": true,
        "files": files,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

/// Discard-protocol port; nothing listens on it on a test host.
const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";

/// A client whose base URL points at a closed local port, so every request
/// fails at the transport level.
pub fn unreachable_client() -> GitHubClient {
    GitHubClient::with_base_url(UNREACHABLE_BASE_URL).unwrap()
}

/// wiremock-based GitHub mock server for testing.
pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get a GitHubClient configured to use this mock server.
    pub fn client(&self) -> GitHubClient {
        GitHubClient::with_base_url(&self.server.uri()).unwrap()
    }

    /// Absolute URL of `path` on the mock server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.server.uri())
    }

    /// Start building a mock for `http_method` on `endpoint_path`.
    pub fn endpoint<'a>(&'a self, http_method: &'a str, endpoint_path: &'a str) -> MockEndpointBuilder<'a> {
        MockEndpointBuilder {
            server: &self.server,
            method: http_method,
            path: endpoint_path,
            query: None,
            token: None,
            body: None,
            status: 200,
        }
    }

    /// All requests received so far, in arrival order.
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// Builder for mocking a single endpoint.
pub struct MockEndpointBuilder<'a> {
    server: &'a MockServer,
    method: &'a str,
    path: &'a str,
    query: Option<(&'a str, &'a str)>,
    token: Option<&'a str>,
    body: Option<serde_json::Value>,
    status: u16,
}

impl<'a> MockEndpointBuilder<'a> {
    /// Only match requests carrying this query parameter.
    pub fn query(mut self, key: &'a str, value: &'a str) -> Self {
        self.query = Some((key, value));
        self
    }

    /// Only match requests with `Authorization: Bearer <token>`.
    pub fn expect_token(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }

    /// Only match requests whose body equals this JSON.
    pub fn expect_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the response status (default: 200).
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Mount the mock, responding with a JSON body.
    pub async fn respond_json(self, body: serde_json::Value) {
        let template = ResponseTemplate::new(self.status).set_body_json(body);
        self.mount(template).await;
    }

    /// Mount the mock, responding with a body sent byte-for-byte.
    pub async fn respond_raw(self, body: &str) {
        let template = ResponseTemplate::new(self.status).set_body_string(body);
        self.mount(template).await;
    }

    /// Mount the mock, responding with arbitrary bytes.
    pub async fn respond_bytes(self, body: &[u8]) {
        let template = ResponseTemplate::new(self.status).set_body_bytes(body.to_vec());
        self.mount(template).await;
    }

    async fn mount(self, template: ResponseTemplate) {
        let mut mock = Mock::given(method(self.method)).and(path(self.path));
        if let Some((key, value)) = self.query {
            mock = mock.and(query_param(key, value));
        }
        if let Some(token) = self.token {
            mock = mock.and(header("authorization", format!("Bearer {token}").as_str()));
        }
        if let Some(body) = self.body {
            mock = mock.and(body_json(body));
        }
        mock.respond_with(template).mount(self.server).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::github::{GitHubError, RepoClient};

    #[tokio::test]
    async fn mock_server_returns_configured_repositories() {
        let mock = GitHubMockServer::start().await;
        mock.endpoint("GET", "/repositories")
            .respond_json(json!([mock_repository(1, "octo/hello", false, Some("Hi"))]))
            .await;

        let repos = mock.client().list_public_repositories().await.unwrap();
        assert_eq!(repos[0]["name"], "hello");
        assert_eq!(repos[0]["description"], "Hi");
    }

    #[tokio::test]
    async fn unmatched_token_falls_through_to_404() {
        let mock = GitHubMockServer::start().await;
        mock.endpoint("GET", "/user/repos")
            .expect_token("right")
            .respond_json(json!([]))
            .await;

        let client = mock.client();
        let body = client.get(&mock.url("/user/repos"), "wrong").await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn unreachable_client_uses_fixed_closed_port() {
        let client = unreachable_client();
        assert_eq!(client.base_url(), UNREACHABLE_BASE_URL);
        assert_eq!(unreachable_client().base_url(), client.base_url());

        let result = client.list_public_repositories().await;
        assert!(matches!(result, Err(GitHubError::Transport { .. })));
    }
}
