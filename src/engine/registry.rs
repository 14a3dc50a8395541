use std::collections::BTreeMap;

use crate::extractors::{CptmExtractor, Extractor, MetroExtractor};
use crate::utils::{
    config::AppConfig,
    error::{TpspError, TpspResult},
};

/// Builds a provider's extractor from the run's configuration
pub type ExtractorFactory = fn(&AppConfig) -> TpspResult<Box<dyn Extractor>>;

/// Compile-time registration entry
#[derive(Clone, Copy)]
pub struct ProviderEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub factory: ExtractorFactory,
}

/// Providers shipped with tpsp
pub const BUILTIN_PROVIDERS: &[ProviderEntry] = &[
    ProviderEntry {
        name: CptmExtractor::NAME,
        description: "CPTM commuter-rail lines",
        factory: CptmExtractor::from_config,
    },
    ProviderEntry {
        name: MetroExtractor::NAME,
        description: "Metro subway lines",
        factory: MetroExtractor::from_config,
    },
];

#[derive(Clone)]
struct RegisteredProvider {
    description: String,
    factory: ExtractorFactory,
}

/// Registry resolving provider names to extractors
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, RegisteredProvider>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in provider
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for entry in BUILTIN_PROVIDERS {
            registry.providers.insert(
                entry.name.to_string(),
                RegisteredProvider {
                    description: entry.description.to_string(),
                    factory: entry.factory,
                },
            );
        }
        registry
    }

    /// Register a provider under a lowercase name
    pub fn register(&mut self, name: &str, description: &str, factory: ExtractorFactory) -> TpspResult<()> {
        let name = name.to_lowercase();
        if self.providers.contains_key(&name) {
            return Err(TpspError::DuplicateProvider(name));
        }

        self.providers.insert(
            name,
            RegisteredProvider {
                description: description.to_string(),
                factory,
            },
        );
        Ok(())
    }

    /// All registered names, sorted
    pub fn list_names(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    /// `(name, description)` pairs, sorted by name
    pub fn describe(&self) -> Vec<(String, String)> {
        self.providers
            .iter()
            .map(|(name, provider)| (name.clone(), provider.description.clone()))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Fail with `ProviderNotFound` unless `name` is registered
    pub fn ensure_registered(&self, name: &str) -> TpspResult<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(self.not_found(name))
        }
    }

    /// Build the extractor registered under `name`
    pub fn resolve(&self, name: &str, config: &AppConfig) -> TpspResult<Box<dyn Extractor>> {
        let provider = self.providers.get(name).ok_or_else(|| self.not_found(name))?;

        (provider.factory)(config)
    }

    fn not_found(&self, name: &str) -> TpspError {
        TpspError::ProviderNotFound {
            name: name.to_string(),
            available: self.list_names().join(", "),
        }
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.list_names())
            .finish()
    }
}
