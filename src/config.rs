//! Application configuration.

use crate::consts::cli_consts::{
    BASE_URL_ENV_VAR, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::endpoint::{BaseUrl, BaseUrlError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::Path, path::PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the usage service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Create Config with the given base URL.
    #[cfg(test)]
    pub fn new(base_url: Option<String>) -> Self {
        Config {
            base_url,
            timeout_secs: None,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the default configuration.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    /// Resolve the base URL: CLI flag, then environment, then this file, then the default.
    pub fn resolve_base_url(
        &self,
        cli_value: Option<&str>,
        env_value: Option<&str>,
    ) -> Result<BaseUrl, BaseUrlError> {
        cli_value
            .or(env_value)
            .or(self.base_url.as_deref())
            .map(str::parse)
            .unwrap_or_else(|| Ok(BaseUrl::default()))
    }

    /// Resolve the request timeout: CLI flag, then this file, then the default.
    pub fn resolve_timeout(&self, cli_value: Option<u64>) -> Duration {
        Duration::from_secs(
            cli_value
                .or(self.timeout_secs)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
                .max(1),
        )
    }
}

/// `$HOME/.usage-dashboard/config.json`
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Base URL override from the environment, if set and non-empty.
pub fn base_url_from_env() -> Option<String> {
    std::env::var(BASE_URL_ENV_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            base_url: Some("http://billing.internal:8000".to_string()),
            timeout_secs: Some(3),
        };
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::new(Some("http://localhost:9000".to_string()));
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // A missing file falls back to defaults, and clearing a missing file is fine.
    fn test_missing_file_defaults_and_clears() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
        assert!(Config::clear(&path).is_ok());

        Config::default().save(&path).unwrap();
        Config::clear(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    // CLI beats environment beats file beats default.
    fn test_base_url_precedence() {
        let config = Config::new(Some("http://from-file:1".to_string()));

        let url = config
            .resolve_base_url(Some("http://from-cli:1"), Some("http://from-env:1"))
            .unwrap();
        assert_eq!(url.to_string(), "http://from-cli:1");

        let url = config
            .resolve_base_url(None, Some("http://from-env:1"))
            .unwrap();
        assert_eq!(url.to_string(), "http://from-env:1");

        let url = config.resolve_base_url(None, None).unwrap();
        assert_eq!(url.to_string(), "http://from-file:1");

        let url = Config::default().resolve_base_url(None, None).unwrap();
        assert_eq!(url, BaseUrl::default());

        assert!(Config::default().resolve_base_url(Some("::"), None).is_err());
    }

    #[test]
    fn test_timeout_resolution() {
        let config = Config {
            base_url: None,
            timeout_secs: Some(30),
        };
        assert_eq!(config.resolve_timeout(Some(5)), Duration::from_secs(5));
        assert_eq!(config.resolve_timeout(None), Duration::from_secs(30));
        assert_eq!(
            Config::default().resolve_timeout(Some(0)),
            Duration::from_secs(1)
        );
        assert_eq!(
            Config::default().resolve_timeout(None),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }
}
