//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{fs, path::Path};

use directories::ProjectDirs;
use log::{debug, info};

use limner::{
    LimnerError,
    config::{AppConfig, ConfigError},
};

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (limner/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, LimnerError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("limner/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "limner", "limner") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
///
/// Parse failures keep the file content so the offending span can be shown.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, LimnerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            let parse_err = ConfigError::Parse {
                message: err.message().to_string(),
                span: err.span(),
            };
            return Err(LimnerError::new_config_error(parse_err, content));
        }
    };

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[extract]\nuntagged_fallback = false\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(!config.extract().untagged_fallback());
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = load_config(Some(PathBuf::from("does/not/exist.toml"))).unwrap_err();
        assert!(matches!(
            err,
            LimnerError::Config {
                err: ConfigError::MissingFile(_),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_error_keeps_source_and_span() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let content = "[extract]\nuntagged_fallback = \"yes\"\n";
        fs::write(&path, content).unwrap();

        match load_config(Some(&path)).unwrap_err() {
            LimnerError::Config {
                err: ConfigError::Parse { span, .. },
                src,
            } => {
                assert_eq!(src, content);
                assert!(span.is_some());
            }
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_system_prompt_fails_validation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[prompt]\nsystem_prompt = \"  \"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(
            err,
            LimnerError::Config {
                err: ConfigError::Validation(_),
                ..
            }
        ));
    }
}
