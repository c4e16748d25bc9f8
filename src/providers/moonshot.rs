//! Moonshot AI (Kimi) provider integration
//!
//! Implements model listing against the OpenAI-compatible
//! `GET {base_url}/models` route and credential-gated model instantiation.
//! The dynamic catalog is merged into the built-in one, de-duplicated by
//! model name with the built-in entry winning; every failure on the read
//! path falls back to the built-in catalog.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::credentials::CredentialKeys;
use crate::error::LlmError;
use crate::openai_like::OpenAiLikeModel;
use crate::provider::{ModelInstanceOptions, ProviderIntegration};
use crate::types::{ModelInfo, ProviderSettings};

/// Canonical provider name, also the key into the explicit API-key map.
pub const PROVIDER_NAME: &str = "Moonshot";

/// Where to obtain an API key.
pub const API_KEY_LINK: &str = "https://platform.moonshot.ai";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.moonshot.ai/v1";

/// Environment key for the API base URL.
pub const BASE_URL_KEY: &str = "MOONSHOT_API_BASE_URL";

/// Environment key for the API token.
pub const API_TOKEN_KEY: &str = "MOONSHOT_API_KEY";

/// Token allowance assumed for dynamic models that do not report a context length.
const DEFAULT_MAX_TOKEN_ALLOWED: u32 = 32_000;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Moonshot model constants
pub mod models {
    /// Moonshot v1, 8K context
    pub const MOONSHOT_V1_8K: &str = "moonshot-v1-8k";
    /// Moonshot v1, 32K context
    pub const MOONSHOT_V1_32K: &str = "moonshot-v1-32k";
    /// Moonshot v1, 128K context
    pub const MOONSHOT_V1_128K: &str = "moonshot-v1-128k";
    /// Kimi K2 7B
    pub const KIMI_K2_7B: &str = "kimi-k2-7b";
    /// Kimi K2 32B
    pub const KIMI_K2_32B: &str = "kimi-k2-32b";

    /// All built-in Moonshot models
    pub const ALL: &[&str] = &[
        MOONSHOT_V1_8K,
        MOONSHOT_V1_32K,
        MOONSHOT_V1_128K,
        KIMI_K2_7B,
        KIMI_K2_32B,
    ];
}

/// Built-in catalog: (name, label, max token allowance), in display order.
const STATIC_MODEL_TABLE: &[(&str, &str, u32)] = &[
    (models::MOONSHOT_V1_8K, "Moonshot v1 8K", 8_000),
    (models::MOONSHOT_V1_32K, "Moonshot v1 32K", 32_000),
    (models::MOONSHOT_V1_128K, "Moonshot v1 128K", 128_000),
    (models::KIMI_K2_7B, "Kimi K2 7B", 32_000),
    (models::KIMI_K2_32B, "Kimi K2 32B", 32_000),
];

/// Moonshot provider integration.
#[derive(Debug, Clone)]
pub struct MoonshotProvider {
    http_client: reqwest::Client,
}

impl MoonshotProvider {
    /// Create a provider with a default HTTP client.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a provider with a caller-configured HTTP client.
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Fetch the dynamic catalog from `{base_url}/models`.
    async fn fetch_models(&self, base_url: &str, api_key: &str) -> Result<Vec<ModelInfo>, LlmError> {
        let url = format!("{}/models", base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(api_key)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::api_error(
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status"),
            ));
        }

        let body = response.text().await?;
        let models_response: MoonshotModelsResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::ParseError(format!("unexpected models response shape: {e}")))?;

        Ok(models_response
            .data
            .into_iter()
            .map(convert_model_entry)
            .collect())
    }
}

impl Default for MoonshotProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderIntegration for MoonshotProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn api_key_link(&self) -> Option<&'static str> {
        Some(API_KEY_LINK)
    }

    fn credential_keys(&self) -> CredentialKeys {
        CredentialKeys {
            base_url_key: BASE_URL_KEY,
            api_token_key: API_TOKEN_KEY,
        }
    }

    fn static_models(&self) -> Vec<ModelInfo> {
        STATIC_MODEL_TABLE
            .iter()
            .map(|&(name, label, max_token_allowed)| ModelInfo {
                name: name.to_string(),
                label: label.to_string(),
                provider: PROVIDER_NAME.to_string(),
                max_token_allowed,
            })
            .collect()
    }

    async fn dynamic_models(
        &self,
        api_keys: Option<&HashMap<String, String>>,
        settings: Option<&ProviderSettings>,
        server_env: &HashMap<String, String>,
    ) -> Vec<ModelInfo> {
        let credentials = self.resolve_credentials(api_keys, settings, server_env);
        let (Some(base_url), Some(api_key)) = (credentials.base_url, credentials.api_key) else {
            // Configuration incompleteness, not an error: skip the network call.
            return self.static_models();
        };

        match self.fetch_models(&base_url, &api_key).await {
            Ok(dynamic) => {
                tracing::debug!("Fetched {} dynamic Moonshot models", dynamic.len());
                merge_models(self.static_models(), dynamic)
            }
            Err(LlmError::ApiError { code, message }) => {
                tracing::warn!("Failed to fetch Moonshot models: {code} {message}");
                self.static_models()
            }
            Err(LlmError::ParseError(message)) => {
                tracing::warn!("Moonshot models response ignored: {message}");
                self.static_models()
            }
            Err(e) => {
                tracing::warn!("Error fetching Moonshot models: {e}");
                self.static_models()
            }
        }
    }

    fn model_instance(
        &self,
        options: &ModelInstanceOptions<'_>,
    ) -> Result<OpenAiLikeModel, LlmError> {
        let credentials = self.resolve_credentials(
            options.api_keys,
            options.provider_settings,
            options.server_env,
        );
        let (Some(base_url), Some(api_key)) = (credentials.base_url, credentials.api_key) else {
            return Err(LlmError::ConfigurationError(format!(
                "Missing configuration for {PROVIDER_NAME} provider. \
                 Please set {API_TOKEN_KEY} and optionally {BASE_URL_KEY}."
            )));
        };

        Ok(OpenAiLikeModel::new(
            PROVIDER_NAME,
            base_url,
            api_key,
            options.model,
        ))
    }
}

/// One entry of the `GET /models` response.
#[derive(Debug, Deserialize)]
struct MoonshotModelEntry {
    id: String,
    context_length: Option<u32>,
}

/// Wire shape of the `GET /models` response.
#[derive(Debug, Deserialize)]
struct MoonshotModelsResponse {
    data: Vec<MoonshotModelEntry>,
}

fn convert_model_entry(entry: MoonshotModelEntry) -> ModelInfo {
    ModelInfo {
        label: entry.id.clone(),
        name: entry.id,
        provider: PROVIDER_NAME.to_string(),
        max_token_allowed: entry.context_length.unwrap_or(DEFAULT_MAX_TOKEN_ALLOWED),
    }
}

/// Merge the dynamic catalog into the static one.
///
/// Static entries keep their position and are never overwritten; dynamic
/// entries whose name is not already present are appended in dynamic order.
fn merge_models(static_models: Vec<ModelInfo>, dynamic_models: Vec<ModelInfo>) -> Vec<ModelInfo> {
    let mut all = static_models;
    for model in dynamic_models {
        if !all.iter().any(|existing| existing.name == model.name) {
            all.push(model);
        }
    }
    all
}
