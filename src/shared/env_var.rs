//! Centralized reader for the environment variables ghdesk consults.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const TOKEN: &str = "GHDESK_TOKEN";
const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
const LOG: &str = "GHDESK_LOG";

/// Snapshot of the relevant environment variables at load time.
pub struct EnvVars {
    /// Bearer token from GHDESK_TOKEN, falling back to GITHUB_TOKEN.
    pub token: Option<String>,

    /// tracing filter directive overriding the configured log level.
    pub log: Option<String>,
}

pub(crate) fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read the environment variables from the current process.
    pub fn load() -> Self {
        Self {
            token: non_empty_var(TOKEN).or_else(|| non_empty_var(GITHUB_TOKEN)),
            log: non_empty_var(LOG),
        }
    }

    /// Token for API calls: the explicit flag wins, then the environment,
    /// otherwise an empty (anonymous) token.
    pub fn resolve_token(&self, flag: Option<&str>) -> String {
        flag.filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| self.token.clone())
            .unwrap_or_default()
    }
}
