//! GitHub API error types.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Invalid request to {url}: {source}")]
    InvalidRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode JSON response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response from {url} is not valid UTF-8: {source}")]
    InvalidText {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("GitHub API error: {message} (HTTP {status})")]
    Status { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl GitHubError {
    /// Build a `Status` error from a non-success response.
    ///
    /// GitHub error bodies look like `{"message": "...", "errors": [...]}`;
    /// anything else falls back to the raw body or the canonical reason.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value) => format_error_body(&value),
            Err(_) => None,
        }
        .or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            (!text.is_empty()).then_some(text)
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());

        Self::Status {
            status: status.as_u16(),
            message,
        }
    }
}

fn format_error_body(value: &serde_json::Value) -> Option<String> {
    let message = value.get("message")?.as_str()?;
    let details = value
        .get("errors")
        .and_then(|v| v.as_array())
        .map(|errors| format_error_details(errors))
        .unwrap_or_default();
    Some(format!("{message}{details}"))
}

/// Format error details from GitHub API errors array.
/// Returns a formatted string like "[field1 is code1, field2 is code2]" or empty string.
fn format_error_details(errors: &[serde_json::Value]) -> String {
    let error_details: Vec<String> = errors
        .iter()
        .filter_map(|e| {
            let field = e.get("field").and_then(|v| v.as_str());
            let code = e.get("code").and_then(|v| v.as_str());
            match (field, code) {
                (Some(f), Some(c)) => Some(format!("{f} is {c}")),
                (Some(f), None) => Some(f.to_string()),
                (None, Some(c)) => Some(c.to_string()),
                (None, None) => None,
            }
        })
        .collect();

    if error_details.is_empty() {
        String::new()
    } else {
        format!(" [{}]", error_details.join(", "))
    }
}
