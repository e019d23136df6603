use crate::config::types::ConsoleConfig;
use crate::config::validator::validate;
use crate::error::{ConsoleError, Result};
use std::path::Path;

/// Environment variable overriding `api.base_url`
pub const API_BASE_ENV: &str = "UDC_API_BASE";

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ConsoleConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ConsoleConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ConsoleConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| ConsoleError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: ConsoleConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with enhanced error context
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ConsoleConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ConsoleError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(ConsoleError::Io)?;

        let config: ConsoleConfig = toml::from_str(&content).map_err(|e| {
            ConsoleError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        validate(&config)?;
        Ok(config)
    }
}

impl ConsoleConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load and validate configuration
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    ///
    /// Returns whether the file was found alongside the configuration. The
    /// `UDC_API_BASE` environment variable is applied in both cases.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<(Self, bool)> {
        let found = path.as_ref().exists();
        let mut config = if found {
            Self::load_with_validation(path)?
        } else {
            Self::default()
        };

        if let Ok(base_url) = std::env::var(API_BASE_ENV) {
            config.apply_api_base(base_url)?;
        }

        Ok((config, found))
    }

    /// Override the API base URL, validating the result
    pub fn apply_api_base<S: Into<String>>(&mut self, base_url: S) -> Result<()> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Ok(());
        }
        self.api.base_url = base_url.trim().to_string();
        validate(self)
    }
}
