//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays free for outcome streams
//! (`palmdeck replay --json`).

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{PalmdeckError, PalmdeckResult};

/// Build the level filter. `RUST_LOG` wins over the configured level; an
/// unparsable level falls back to `info`.
pub fn build_filter(level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Invalid log level {level:?} ({e}), using info");
        EnvFilter::new("info")
    })
}

/// Install the global subscriber. Fails if one is already installed.
pub fn try_init_logging(config: &LoggingConfig) -> PalmdeckResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level))
        .with_writer(std::io::stderr);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.with_target(true).compact().try_init()
    };
    result.map_err(|e| PalmdeckError::config(format!("Failed to install logger: {e}")))
}

/// Install the global subscriber, ignoring a second initialization.
pub fn init_logging(config: &LoggingConfig) {
    let _ = try_init_logging(config);
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}
