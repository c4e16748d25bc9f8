//! Shared data types
//!
//! Provider-agnostic records exchanged with the host application. Both are
//! plain data and serialize directly for the UI: [`ModelInfo`] uses the
//! camelCase field names the frontend expects.

use serde::{Deserialize, Serialize};

/// One entry of a provider's model catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Unique model identifier used in API requests
    pub name: String,
    /// Human-readable display name
    pub label: String,
    /// Name of the provider that serves this model
    pub provider: String,
    /// Maximum token allowance for a request
    pub max_token_allowed: u32,
}

/// Per-provider user settings, one configuration layer consulted during
/// credential resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    /// Whether the provider is enabled in the UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Base URL override for the provider API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// API key override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}
