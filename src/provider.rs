//! Provider integration trait
//!
//! Each external LLM provider is one implementation of
//! [`ProviderIntegration`]; the host application holds them behind
//! `Arc<dyn ProviderIntegration>` in a [`crate::registry::ProviderRegistry`]
//! and dispatches dynamically. The capability set is deliberately small:
//! list models (static and dynamic), resolve credentials, and mint a model
//! handle.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::credentials::{self, CredentialKeys, Credentials};
use crate::error::LlmError;
use crate::openai_like::OpenAiLikeModel;
use crate::types::{ModelInfo, ProviderSettings};

/// Options for [`ProviderIntegration::model_instance`].
#[derive(Debug, Clone, Copy)]
pub struct ModelInstanceOptions<'a> {
    /// Model identifier to bind the handle to
    pub model: &'a str,
    /// Explicit API-key map, keyed by provider name
    pub api_keys: Option<&'a HashMap<String, String>>,
    /// This provider's settings record
    pub provider_settings: Option<&'a ProviderSettings>,
    /// Server environment map
    pub server_env: &'a HashMap<String, String>,
}

/// Capability surface shared by all provider integrations.
#[async_trait]
pub trait ProviderIntegration: Send + Sync {
    /// Canonical provider name (e.g. "Moonshot"), also the key into the
    /// explicit API-key map.
    fn name(&self) -> &'static str;

    /// Where a user obtains an API key for this provider.
    fn api_key_link(&self) -> Option<&'static str> {
        None
    }

    /// Fixed configuration key names for this provider.
    fn credential_keys(&self) -> CredentialKeys;

    /// The built-in model catalog, in its fixed order.
    fn static_models(&self) -> Vec<ModelInfo>;

    /// The usable model catalog: the static list merged with whatever the
    /// provider API reports. Never fails; every error path degrades to the
    /// static catalog.
    async fn dynamic_models(
        &self,
        api_keys: Option<&HashMap<String, String>>,
        settings: Option<&ProviderSettings>,
        server_env: &HashMap<String, String>,
    ) -> Vec<ModelInfo>;

    /// Mint a model handle bound to `(base_url, api_key, model)`.
    ///
    /// Unlike the read paths this fails loudly when credentials are missing:
    /// a handle without credentials would be broken, not a safe default.
    fn model_instance(
        &self,
        options: &ModelInstanceOptions<'_>,
    ) -> Result<OpenAiLikeModel, LlmError>;

    /// Resolve this provider's credentials from the layered sources.
    fn resolve_credentials(
        &self,
        api_keys: Option<&HashMap<String, String>>,
        settings: Option<&ProviderSettings>,
        server_env: &HashMap<String, String>,
    ) -> Credentials {
        credentials::resolve(
            self.name(),
            &self.credential_keys(),
            api_keys,
            settings,
            server_env,
        )
    }
}
