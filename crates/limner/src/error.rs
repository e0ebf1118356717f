//! Error types for Limner operations.
//!
//! The pipeline itself never fails: a message that is not a diagram request
//! or a reply without a diagram is reported as `None`. [`LimnerError`] covers
//! the layers around it, such as reading inputs, loading configuration and
//! parsing user-supplied diagram type names.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// The main error type for Limner operations.
///
/// # Diagnostic Variants
///
/// The `Config` variant keeps the configuration source text next to the
/// error, so a parse failure can be shown with the offending span.
#[derive(Debug, Error)]
pub enum LimnerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Config { err: ConfigError, src: String },

    #[error("{0}")]
    DiagramType(String),
}

impl From<ConfigError> for LimnerError {
    fn from(err: ConfigError) -> Self {
        Self::Config {
            err,
            src: String::new(),
        }
    }
}

impl LimnerError {
    /// Create a new `Config` error with the associated configuration source.
    pub fn new_config_error(err: ConfigError, src: impl Into<String>) -> Self {
        Self::Config {
            err,
            src: src.into(),
        }
    }
}
