//! HTTP request helper for the GitHub REST API.

use reqwest::header::ACCEPT;
use reqwest::{Method, Request};
use tracing::{debug, warn};

use super::ApiResponse;
use super::error::{GitHubError, Result};
use crate::shared::config::ApiConfig;

/// Default GitHub REST API base URL.
pub const GITHUB_API: &str = "https://api.github.com";

/// Media type sent in the `Accept` header of every request.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Client for the GitHub REST API.
///
/// Holds no per-call state: the token travels with each call and responses
/// are decoded into call-local values, so one instance can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    fail_on_error_status: bool,
}

impl GitHubClient {
    /// Create a client from the `api` section of the configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(GitHubError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            fail_on_error_status: config.fail_on_error_status,
        })
    }

    /// Create a client with default settings pointed at `base_url`.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    /// Turn non-2xx responses into `GitHubError::Status` instead of
    /// returning their bodies.
    pub fn fail_on_error_status(mut self, enabled: bool) -> Self {
        self.fail_on_error_status = enabled;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/gists`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Build a request carrying the GitHub media type and, for a non-empty
    /// token, a bearer `Authorization` header.
    pub(crate) fn build_request(
        &self,
        method: Method,
        url: &str,
        token: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request> {
        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, GITHUB_MEDIA_TYPE);

        if !token.is_empty() {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = body {
            builder = builder.body(body);
        }

        builder.build().map_err(|source| GitHubError::InvalidRequest {
            url: url.to_string(),
            source,
        })
    }

    /// Send a single request and return the raw response body.
    ///
    /// The status code is not interpreted unless strict status mode is on.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        token: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let request = self.build_request(method.clone(), url, token, body)?;
        debug!(%method, url, authenticated = !token.is_empty(), "sending GitHub API request");

        let transport = |source| GitHubError::Transport {
            url: url.to_string(),
            source,
        };
        let response = self.http.execute(request).await.map_err(transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport)?;
        debug!(%status, url, len = bytes.len(), "received GitHub API response");

        if !status.is_success() {
            warn!(%status, url, "GitHub API returned an error status");
            if self.fail_on_error_status {
                return Err(GitHubError::from_response(status, &bytes));
            }
        }

        Ok(bytes.to_vec())
    }

    pub async fn get(&self, url: &str, token: &str) -> Result<Vec<u8>> {
        self.request(Method::GET, url, token, None).await
    }

    pub async fn post(&self, url: &str, token: &str, payload: Vec<u8>) -> Result<Vec<u8>> {
        self.request(Method::POST, url, token, Some(payload)).await
    }

    /// GET `url` and decode the body as JSON.
    pub(crate) async fn get_json(&self, url: &str, token: &str) -> Result<ApiResponse> {
        let body = self.get(url, token).await?;
        decode(url, &body)
    }
}

/// Decode a response body into a fresh value owned by the caller.
pub(crate) fn decode(url: &str, body: &[u8]) -> Result<ApiResponse> {
    serde_json::from_slice(body).map_err(|source| GitHubError::Decode {
        url: url.to_string(),
        source,
    })
}
