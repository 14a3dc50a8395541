use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::source::HtmlSource;
use crate::utils::{
    config::HttpConfig,
    error::{SourceError, TpspResult},
};

/// HTTP-backed page source
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Create a new source from HTTP settings
    pub fn new(config: &HttpConfig) -> TpspResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SourceError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HtmlSource for HttpSource {
    async fn fetch_page(&self, url: &Url) -> TpspResult<String> {
        tracing::debug!(%url, "fetching status page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "status page answered");

        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(|e| SourceError::RequestFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_creation() {
        let config = HttpConfig::default();
        assert!(HttpSource::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_source_error() {
        let config = HttpConfig {
            timeout_seconds: 2,
            ..HttpConfig::default()
        };
        let source = HttpSource::new(&config).unwrap();
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();

        match source.fetch_page(&url).await {
            Err(crate::utils::error::TpspError::Source(SourceError::RequestFailed { url, .. })) => {
                assert_eq!(url, format!("http://127.0.0.1:{}/", port));
            }
            other => panic!("Expected RequestFailed, got {:?}", other.map(|_| ())),
        }
    }
}
