//! Provider registry
//!
//! Holds every configured provider integration behind
//! `Arc<dyn ProviderIntegration>` and resolves them by name. The host
//! application usually goes through the process-wide [`default_registry`];
//! tests and embedders can build their own.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::provider::ProviderIntegration;
use crate::providers::moonshot::MoonshotProvider;

/// Registry of provider integrations, looked up by case-insensitive name.
#[derive(Default)]
pub struct ProviderRegistry {
    by_name: HashMap<String, Arc<dyn ProviderIntegration>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all built-in providers pre-registered.
    pub fn with_builtin_providers() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(MoonshotProvider::new()));
        registry
    }

    /// Register a provider under its canonical name.
    ///
    /// Registering a second provider with the same name replaces the first.
    pub fn register(&mut self, provider: Arc<dyn ProviderIntegration>) {
        self.by_name
            .insert(provider.name().to_ascii_lowercase(), provider);
    }

    /// Look up a provider by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ProviderIntegration>> {
        self.by_name.get(&name.to_ascii_lowercase()).cloned()
    }

    /// Canonical names of all registered providers, sorted.
    pub fn provider_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> =
            self.by_name.values().map(|p| p.name()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

static DEFAULT_REGISTRY: LazyLock<ProviderRegistry> =
    LazyLock::new(ProviderRegistry::with_builtin_providers);

/// The process-wide registry with all built-in providers.
pub fn default_registry() -> &'static ProviderRegistry {
    &DEFAULT_REGISTRY
}

/// Look up a provider in the process-wide registry.
pub fn get_provider(name: &str) -> Option<Arc<dyn ProviderIntegration>> {
    default_registry().get(name)
}
