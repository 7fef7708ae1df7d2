pub mod config;
pub mod fetch;
pub mod gists;
mod output;
pub mod repos;

use anyhow::bail;

/// Fail early for operations that are meaningless without a token.
fn require_token(token: &str) -> anyhow::Result<&str> {
    if token.is_empty() {
        bail!("This command requires a GitHub token: pass --token or set GHDESK_TOKEN");
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_token_rejects_empty() {
        let err = require_token("").unwrap_err();
        assert!(err.to_string().contains("--token"));
    }

    #[test]
    fn require_token_passes_token_through() {
        assert_eq!(require_token("tok").unwrap(), "tok");
    }
}
