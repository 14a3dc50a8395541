use std::sync::Arc;

use crate::engine::registry::ProviderRegistry;
use crate::source::{HtmlSource, HttpSource};
use crate::utils::{config::AppConfig, error::TpspResult, types::LineStatus};

/// Ties the registry and a page source together for one run
pub struct StatusEngine {
    config: AppConfig,
    registry: ProviderRegistry,
    source: Arc<dyn HtmlSource>,
}

impl StatusEngine {
    pub fn new(config: AppConfig, registry: ProviderRegistry, source: Arc<dyn HtmlSource>) -> Self {
        Self {
            config,
            registry,
            source,
        }
    }

    /// Engine with the built-in providers fetching over HTTP
    pub fn from_config(config: AppConfig) -> TpspResult<Self> {
        let source = HttpSource::new(&config.http)?;
        Ok(Self::new(config, ProviderRegistry::with_builtin(), Arc::new(source)))
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Current status of every line tracked by `provider`.
    ///
    /// The name is resolved before any request is made, so an unknown
    /// provider never touches the network.
    pub async fn fetch(&self, provider: &str) -> TpspResult<Vec<LineStatus>> {
        let extractor = self.registry.resolve(provider, &self.config)?;
        tracing::debug!(provider, url = %extractor.source_url(), "resolved provider");

        extractor.fetch_data(self.source.as_ref()).await
    }
}
