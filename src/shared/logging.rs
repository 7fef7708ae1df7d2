//! tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::config::{LogConfig, LogFormat};

/// Install the global subscriber, writing to stderr so stdout stays
/// reserved for command output.
///
/// Fails if a global subscriber is already installed; an embedding frontend
/// that sets up its own can skip this or ignore the error.
pub fn init(config: &LogConfig, env_override: Option<&str>) -> Result<(), TryInitError> {
    let filter = env_filter(config, env_override);
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    }
}

/// The override directive wins when it parses; otherwise the configured level.
fn env_filter(config: &LogConfig, env_override: Option<&str>) -> EnvFilter {
    env_override
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(&config.level))
}
