//! Tracing setup for the userd binary
//!
//! Usage:
//!   userd --debug serve ...            # Debug logging to console
//!   RUST_LOG=userd_server=debug userd  # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
}

/// Initialize console tracing
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(config))
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn filter_for(config: &TracingConfig) -> EnvFilter {
    let default = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn filter_defaults_follow_debug_flag() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let quiet = filter_for(&TracingConfig { debug: false });
        assert_eq!(quiet.max_level_hint(), Some(LevelFilter::INFO));
        let verbose = filter_for(&TracingConfig { debug: true });
        assert_eq!(verbose.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
