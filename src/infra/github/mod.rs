//! GitHub REST API client module.
//!
//! `GitHubClient` issues single requests with the GitHub media type and an
//! optional bearer token; the `RepoClient`, `GistClient` and `ResourceClient`
//! traits expose the endpoints the frontend uses.

mod client;
pub(crate) mod error;
mod gist;
#[cfg(test)]
pub(crate) mod mock;
mod repo;
mod resource;

pub use client::{GITHUB_API, GITHUB_MEDIA_TYPE, GitHubClient};
pub use error::{GitHubError, Result};
pub use gist::{GistClient, NewGist};
pub use repo::RepoClient;
pub use resource::ResourceClient;

/// Untyped JSON value returned verbatim from the GitHub API.
pub type ApiResponse = serde_json::Value;
