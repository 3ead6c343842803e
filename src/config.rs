//! Client configuration.
//!
//! Resolution order matches the rest of the deployment tooling: an explicit
//! TOML file wins, then environment variables, then built-in defaults.
//!
//! # Environment Variables
//!
//! - `EXOLAB_SERVICE_URL`: base URL of the analysis service
//!   (default: `http://127.0.0.1:5000`)

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default base URL of the analysis service (its development port).
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

/// Configuration for the remote analysis client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the analysis service, without a trailing slash.
    #[serde(default = "default_service_url")]
    pub base_url: String,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_url(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("EXOLAB_SERVICE_URL").unwrap_or_else(|_| default_service_url()),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Base URL normalized for joining with endpoint identifiers.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_points_at_dev_service() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig {
            base_url: "http://example.com/api/".to_string(),
        };
        assert_eq!(config.base_url_trimmed(), "http://example.com/api");
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://analysis.internal:8080\"").unwrap();
        let config = ClientConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://analysis.internal:8080");
    }

    #[test]
    fn test_from_toml_file_defaults_missing_fields() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = ClientConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.base_url, DEFAULT_SERVICE_URL);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(ClientConfig::from_toml_file("/nonexistent/exolab.toml").is_err());
    }
}
