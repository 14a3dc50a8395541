use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use url::Url;

use crate::utils::error::{TpspError, TpspResult};

/// Environment variable pointing at a configuration file
pub const CONFIG_ENV_VAR: &str = "TPSP_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub providers: HashMap<String, ProviderConfig>,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Per-provider overrides
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub url: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("tpsp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or from `TPSP_CONFIG` when no path is
    /// given. Without either, defaults are used.
    pub fn load(path: Option<&Path>) -> TpspResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match std::env::var_os(CONFIG_ENV_VAR) {
                Some(path) => Self::from_file(Path::new(&path)),
                None => Ok(Self::default()),
            },
        }
    }

    /// Read a JSON configuration file
    pub fn from_file(path: &Path) -> TpspResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TpspError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
            .map_err(|e| TpspError::Configuration(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Source URL for a provider, honouring any override
    pub fn provider_url(&self, provider: &str, default_url: &str) -> TpspResult<Url> {
        let raw = self
            .providers
            .get(provider)
            .and_then(|p| p.url.as_deref())
            .unwrap_or(default_url);

        Url::parse(raw).map_err(|e| {
            TpspError::Configuration(format!("invalid URL '{}' for provider '{}': {}", raw, provider, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();

        assert_eq!(config.http.timeout_seconds, 30);
        assert!(config.http.user_agent.starts_with("tpsp/"));
        assert!(config.providers.is_empty());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AppConfig::from_json(r#"{ "http": { "timeout_seconds": 5 } }"#).unwrap();

        assert_eq!(config.http.timeout_seconds, 5);
        assert!(config.http.user_agent.starts_with("tpsp/"));
    }

    #[test]
    fn test_provider_url_override() {
        let config = AppConfig::from_json(
            r#"{ "providers": { "metro": { "url": "http://localhost:8080/metro" } } }"#,
        )
        .unwrap();

        let url = config.provider_url("metro", "http://www.metro.sp.gov.br/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/metro");

        let url = config.provider_url("cptm", "https://www.cptm.sp.gov.br/").unwrap();
        assert_eq!(url.as_str(), "https://www.cptm.sp.gov.br/");
    }

    #[test]
    fn test_provider_url_invalid() {
        let config = AppConfig::from_json(r#"{ "providers": { "cptm": { "url": "not a url" } } }"#)
            .unwrap();

        match config.provider_url("cptm", "https://www.cptm.sp.gov.br/") {
            Err(TpspError::Configuration(msg)) => assert!(msg.contains("cptm")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }
}
