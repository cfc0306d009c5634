//! Configuration module for the CMS server.
//!
//! Loads configuration from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // MongoDB
    pub mongodb_uri: String,
    pub mongodb_database: String,

    // HTTP
    pub bind_addr: SocketAddr,
    /// Base for public image URLs (`{base}/images/{name}`).
    pub public_base_url: Url,
    /// Where logout redirects.
    pub login_path: String,

    // Files
    /// Root for the image bucket directory.
    pub storage_dir: PathBuf,
    /// Directory with `en.json`/`es.json` overriding the bundled defaults.
    pub translations_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mongodb_uri = var("MONGODB_URI").ok_or(ConfigError::Missing("MONGODB_URI"))?;

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let public_base_url = Url::parse(
            &var("PUBLIC_BASE_URL").unwrap_or_else(|| "http://localhost:8080".to_string()),
        )
        .map_err(|e| ConfigError::Invalid {
            name: "PUBLIC_BASE_URL",
            reason: e.to_string(),
        })?;
        if public_base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid {
                name: "PUBLIC_BASE_URL",
                reason: "not a base URL".to_string(),
            });
        }

        let login_path = var("LOGIN_PATH").unwrap_or_else(|| "/admin/login".to_string());

        Ok(Self {
            mongodb_uri,
            mongodb_database: var("MONGODB_DATABASE").unwrap_or_else(|| "multiedge".to_string()),
            bind_addr,
            public_base_url,
            login_path,
            storage_dir: var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./storage")),
            translations_dir: var("TRANSLATIONS_DIR").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("MONGODB_URI", "mongodb://localhost:27017")]).unwrap();

        assert_eq!(config.mongodb_database, "multiedge");
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.public_base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.login_path, "/admin/login");
        assert_eq!(config.storage_dir, PathBuf::from("./storage"));
        assert!(config.translations_dir.is_none());
    }

    #[test]
    fn test_mongodb_uri_required() {
        let err = load(&[("MONGODB_URI", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("MONGODB_URI")));
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("MONGODB_URI", "mongodb://db"), ("BIND_ADDR", "nowhere")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "BIND_ADDR", .. }));

        let err = load(&[("MONGODB_URI", "mongodb://db"), ("PUBLIC_BASE_URL", "mailto:x@y")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PUBLIC_BASE_URL", .. }));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("MONGODB_URI", "mongodb://db"),
            ("MONGODB_DATABASE", "site"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("PUBLIC_BASE_URL", "https://cdn.example.com/assets/"),
            ("TRANSLATIONS_DIR", "/etc/multiedge/i18n"),
        ])
        .unwrap();

        assert_eq!(config.mongodb_database, "site");
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.public_base_url.path(), "/assets/");
        assert_eq!(
            config.translations_dir,
            Some(PathBuf::from("/etc/multiedge/i18n"))
        );
    }
}
