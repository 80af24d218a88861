//! Error types shared across Palmdeck crates.

use std::path::PathBuf;

/// Top-level error type for Palmdeck operations.
///
/// The gesture core never produces these; they come from the adapters
/// around it (frame sources, action sinks, platform queries, config files).
#[derive(Debug, thiserror::Error)]
pub enum PalmdeckError {
    #[error("Frame source error: {message}")]
    Source { message: String },

    #[error("Action sink error: {message}")]
    Sink { message: String },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using PalmdeckError.
pub type PalmdeckResult<T> = Result<T, PalmdeckError>;

impl PalmdeckError {
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source {
            message: msg.into(),
        }
    }

    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink {
            message: msg.into(),
        }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
