//! Gist operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ApiResponse;
use super::client::{GitHubClient, decode};
use super::error::{GitHubError, Result};

const PUBLIC_GISTS: &str = "/gists/public";
const GISTS: &str = "/gists";

/// Payload for `POST /gists`.
///
/// `files` is passed through verbatim, normally an object mapping file names
/// to `{"content": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGist {
    pub description: String,
    pub public: bool,
    pub files: Value,
}

impl NewGist {
    /// Build a gist from `(file name, content)` pairs.
    pub fn from_contents<I, N, C>(description: impl Into<String>, public: bool, files: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let files: Map<String, Value> = files
            .into_iter()
            .map(|(name, content)| {
                let mut file = Map::new();
                file.insert("content".to_string(), Value::String(content.into()));
                (name.into(), Value::Object(file))
            })
            .collect();

        Self {
            description: description.into(),
            public,
            files: Value::Object(files),
        }
    }
}

/// Trait for gist operations.
#[async_trait::async_trait]
pub trait GistClient: Send + Sync {
    /// List public gists, anonymously.
    async fn list_public_gists(&self) -> Result<ApiResponse>;

    /// List the gists of the user owning `token`.
    async fn list_gists_for_authenticated_user(&self, token: &str) -> Result<ApiResponse>;

    /// Fetch the body at `url` (usually a gist file's `raw_url`) as text.
    async fn get_gist_content(&self, url: &str, token: &str) -> Result<String>;

    /// Create a gist and return the created resource.
    async fn create_gist(&self, gist: &NewGist, token: &str) -> Result<ApiResponse>;
}

#[async_trait::async_trait]
impl GistClient for GitHubClient {
    async fn list_public_gists(&self) -> Result<ApiResponse> {
        self.get_json(&self.endpoint(PUBLIC_GISTS), "").await
    }

    async fn list_gists_for_authenticated_user(&self, token: &str) -> Result<ApiResponse> {
        self.get_json(&self.endpoint(GISTS), token).await
    }

    async fn get_gist_content(&self, url: &str, token: &str) -> Result<String> {
        let body = self.get(url, token).await?;
        String::from_utf8(body).map_err(|source| GitHubError::InvalidText {
            url: url.to_string(),
            source,
        })
    }

    async fn create_gist(&self, gist: &NewGist, token: &str) -> Result<ApiResponse> {
        let payload = serde_json::to_vec(gist).map_err(GitHubError::Encode)?;
        let url = self.endpoint(GISTS);
        let body = self.post(&url, token, payload).await?;
        decode(&url, &body)
    }
}
