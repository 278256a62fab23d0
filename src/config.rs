//! Application configuration
//!
//! Values come from three layers: built-in defaults, an optional TOML file,
//! and command line flags (which may also be set through environment
//! variables). Later layers win.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::docs::storage::DocsStorage;
use crate::rate_limit::RateLimitConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Documentation root, one subdirectory per component
    pub docs_root: Option<PathBuf>,
    pub http: HttpConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: SocketAddr,
    /// Use the first `X-Forwarded-For` entry as the client identity
    pub trust_forwarded_for: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            docs_root: None,
            http: HttpConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            trust_forwarded_for: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The configured documentation root, or `~/.component-docs/docs`
    pub fn resolve_docs_root(&self) -> Result<PathBuf> {
        match &self.docs_root {
            Some(root) => Ok(root.clone()),
            None => DocsStorage::default_docs_root(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.docs_root.is_none());
        assert_eq!(config.http.bind.port(), 8080);
        assert!(!config.http.trust_forwarded_for);
        assert_eq!(config.rate_limit.max_requests, 10);
        assert_eq!(config.rate_limit.window_secs, 60);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() -> Result<()> {
        let config = AppConfig::from_toml_str(
            r#"
docs_root = "/srv/docs"

[rate_limit]
max_requests = 25
"#,
        )?;

        assert_eq!(config.docs_root, Some(PathBuf::from("/srv/docs")));
        assert_eq!(config.rate_limit.max_requests, 25);
        assert_eq!(config.rate_limit.window_secs, 60);
        assert_eq!(config.http, HttpConfig::default());
        Ok(())
    }

    #[test]
    fn test_http_section() -> Result<()> {
        let config = AppConfig::from_toml_str(
            r#"
[http]
bind = "0.0.0.0:9000"
trust_forwarded_for = true
"#,
        )?;
        assert_eq!(config.http.bind, "0.0.0.0:9000".parse::<SocketAddr>()?);
        assert!(config.http.trust_forwarded_for);
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[rate_limit]\nwindow_secs = 5\n")?;

        let config = AppConfig::load(Some(&path))?;
        assert_eq!(config.rate_limit.window_secs, 5);

        assert_eq!(AppConfig::load(None)?, AppConfig::default());
        assert!(AppConfig::load(Some(&temp_dir.path().join("missing.toml"))).is_err());
        Ok(())
    }

    #[test]
    fn test_invalid_toml() {
        assert!(AppConfig::from_toml_str("rate_limit = 3").is_err());
    }

    #[test]
    fn test_resolve_docs_root_prefers_configured_path() -> Result<()> {
        let config = AppConfig {
            docs_root: Some(PathBuf::from("/opt/docs")),
            ..AppConfig::default()
        };
        assert_eq!(config.resolve_docs_root()?, PathBuf::from("/opt/docs"));
        Ok(())
    }
}
