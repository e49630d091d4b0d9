//! Tracing setup for the binary.

use crate::config::LogConfig;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Filter for the process-wide subscriber.
///
/// `--verbose` wins, then `RUST_LOG`, then `[log] level` from config.
pub fn filter(verbose: bool, config: &LogConfig) -> EnvFilter {
    if verbose {
        EnvFilter::new("figspec=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level()))
    }
}

/// Warn-level stderr subscriber used while the config itself is loading.
pub fn bootstrap() -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
}

/// Install the stderr subscriber. Call once, from `main`.
pub fn init(verbose: bool, config: &LogConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, config))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
