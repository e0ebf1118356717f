//! Configuration types for the Limner pipeline.
//!
//! This module provides configuration structures that tune how prompts are
//! built and how model replies are scanned. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining prompt and extraction settings.
//! - [`PromptConfig`] - Overrides for the text sent to the generation model.
//! - [`ExtractConfig`] - Controls which extraction phases run on model replies.
//! - [`ConfigError`] - Errors raised while loading or validating configuration.
//!
//! # Example
//!
//! ```
//! # use limner::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.extract().untagged_fallback());
//! assert!(config.validate().is_ok());
//! ```

use std::{ops::Range, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {message}")]
    Parse {
        message: String,
        /// Byte range of the offending TOML, when known.
        span: Option<Range<usize>>,
    },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level configuration combining prompt and extraction settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Prompt configuration section.
    #[serde(default)]
    prompt: PromptConfig,

    /// Extraction configuration section.
    #[serde(default)]
    extract: ExtractConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `prompt` - Prompt text overrides.
    /// * `extract` - Extraction phase settings.
    pub fn new(prompt: PromptConfig, extract: ExtractConfig) -> Self {
        Self { prompt, extract }
    }

    /// Returns the prompt configuration.
    pub fn prompt(&self) -> &PromptConfig {
        &self.prompt
    }

    /// Returns the extraction configuration.
    pub fn extract(&self) -> &ExtractConfig {
        &self.extract
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the system prompt override is
    /// present but blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let blank_prompt = self
            .prompt
            .system_prompt()
            .is_some_and(|prompt| prompt.trim().is_empty());

        if blank_prompt {
            return Err(ConfigError::Validation(
                "prompt.system_prompt must not be blank; remove it to use the default".to_string(),
            ));
        }
        Ok(())
    }
}

/// Overrides for the text sent to the generation model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptConfig {
    /// Replacement for the default assistant system prompt.
    #[serde(default)]
    system_prompt: Option<String>,
}

impl PromptConfig {
    /// Creates a new [`PromptConfig`].
    ///
    /// # Arguments
    ///
    /// * `system_prompt` - Replacement system prompt, or `None` for the default.
    pub fn new(system_prompt: Option<String>) -> Self {
        Self { system_prompt }
    }

    /// Returns the system prompt override, if one is configured.
    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }
}

/// Controls which extraction phases run on model replies.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Whether to inspect the first untagged fence when no tagged block exists.
    #[serde(default = "default_untagged_fallback")]
    untagged_fallback: bool,
}

fn default_untagged_fallback() -> bool {
    true
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            untagged_fallback: default_untagged_fallback(),
        }
    }
}

impl ExtractConfig {
    /// Creates a new [`ExtractConfig`].
    ///
    /// # Arguments
    ///
    /// * `untagged_fallback` - Whether the untagged fence phase runs.
    pub fn new(untagged_fallback: bool) -> Self {
        Self { untagged_fallback }
    }

    /// Returns `true` if the untagged fence phase is enabled.
    pub fn untagged_fallback(&self) -> bool {
        self.untagged_fallback
    }
}
