//! Shared logging utilities for consistent tracing across both binaries

use crate::errors::{SharedError, SharedResult};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize tracing with an optional log level override.
///
/// The `RUST_LOG` environment variable takes precedence when set; otherwise
/// the provided level (or "info") is used as the default directive.
pub fn init_tracing(log_level: Option<&str>) -> SharedResult<()> {
    let default_directive = log_level.unwrap_or("info");

    let filter = match std::env::var("RUST_LOG") {
        Ok(env_directive) => {
            EnvFilter::try_new(&env_directive).map_err(|_| SharedError::InvalidLogFilter {
                directive: env_directive,
            })?
        }
        Err(_) => EnvFilter::try_new(default_directive).map_err(|_| SharedError::InvalidLogFilter {
            directive: default_directive.to_string(),
        })?,
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}
