//! CLI configuration: file, then environment, then flags.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracker_core::{ConfigError, StoreConfig};

/// Environment variable overriding the store base URL.
pub const ENV_STORE_URL: &str = "TASK_TRACKER_STORE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "TASK_TRACKER_TIMEOUT_SECS";

/// Configuration for the command-line client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Store location.
    #[serde(flatten)]
    pub store: StoreConfig,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigError::TomlParseFailed` on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParseFailed {
            reason: e.to_string(),
        })
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for a non-numeric timeout.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for a non-numeric timeout.
    pub fn with_env_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(ENV_STORE_URL) {
            self.store.base_url = url;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = secs
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid_value(ENV_TIMEOUT_SECS, format!("{e}")))?;
        }

        Ok(self)
    }

    /// Use `url` as the store base when given.
    #[must_use]
    pub fn with_store_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.store.base_url = url;
        }
        self
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

const fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_toml_flattened_keys() -> Result<(), ConfigError> {
        let config = TrackerConfig::from_toml_str(
            r#"
            base_url = "http://127.0.0.1:9000/"
            collection = "chores"
            timeout_secs = 5
            "#,
        )?;

        assert_eq!(config.store.base_url, "http://127.0.0.1:9000/");
        assert_eq!(config.store.collection, "chores");
        assert_eq!(config.timeout_secs, 5);
        Ok(())
    }

    #[test]
    fn test_env_overrides_file() -> Result<(), ConfigError> {
        let env: HashMap<&str, &str> = [
            (ENV_STORE_URL, "http://env.example/"),
            (ENV_TIMEOUT_SECS, " 7 "),
        ]
        .into_iter()
        .collect();

        let config = TrackerConfig::from_toml_str(r#"base_url = "http://file.example/""#)?
            .with_env_from(|key| env.get(key).map(ToString::to_string))?;

        assert_eq!(config.store.base_url, "http://env.example/");
        assert_eq!(config.timeout_secs, 7);
        Ok(())
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let result = TrackerConfig::default()
            .with_env_from(|key| (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_flag_wins_last() {
        let config = TrackerConfig::default().with_store_url(Some("http://flag.example/".into()));
        assert_eq!(config.store.base_url, "http://flag.example/");

        let untouched = TrackerConfig::default().with_store_url(None);
        assert_eq!(untouched, TrackerConfig::default());
    }

    #[test]
    fn test_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "timeout_secs = 3")?;

        let config = TrackerConfig::from_file(file.path())?;
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.store, StoreConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_toml_keeps_store_defaults() -> Result<(), ConfigError> {
        let config = TrackerConfig::from_toml_str(r#"base_url = "http://127.0.0.1:9000/""#)?;
        assert_eq!(config.store.base_url, "http://127.0.0.1:9000/");
        assert_eq!(config.store.collection, "tasks");
        assert_eq!(config.timeout_secs, 30);
        Ok(())
    }

    #[test]
    fn test_malformed_toml() {
        let result = TrackerConfig::from_toml_str("base_url = ");
        assert!(matches!(result, Err(ConfigError::TomlParseFailed { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = TrackerConfig::from_file(Path::new("/nonexistent/tracker.toml"));
        assert!(matches!(result, Err(ConfigError::FileReadFailed { .. })));
    }
}
