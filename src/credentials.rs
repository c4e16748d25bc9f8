//! Layered credential resolution
//!
//! Providers resolve their base URL and API key from three configuration
//! layers, highest priority first:
//!
//! 1. the explicit API-key map the user maintains in the UI (keyed by
//!    provider name),
//! 2. the per-provider settings record,
//! 3. the server environment map, indexed by the provider's fixed default
//!    key names.
//!
//! Resolution is a pure function over its inputs; nothing here touches
//! process state or the network.

use std::collections::HashMap;

use crate::types::ProviderSettings;

/// Fixed configuration key names for one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialKeys {
    /// Environment key holding the API base URL
    pub base_url_key: &'static str,
    /// Environment key holding the API token
    pub api_token_key: &'static str,
}

/// Resolved `(base_url, api_key)` pair for one call.
///
/// Either side may be absent; the read paths treat that as an expected
/// configuration-incompleteness state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// API base URL, normalized without a trailing slash
    pub base_url: Option<String>,
    /// API key
    pub api_key: Option<String>,
}

impl Credentials {
    /// Both the base URL and the API key resolved.
    pub fn is_complete(&self) -> bool {
        self.base_url.is_some() && self.api_key.is_some()
    }
}

/// Resolve credentials for `provider_name` from the layered sources.
///
/// The API key is looked up in the explicit map first (keyed by provider
/// name), then the settings record, then the server environment under
/// `keys.api_token_key`. The base URL comes from the settings record, then
/// the server environment under `keys.base_url_key`. Empty strings count as
/// absent, and base URLs lose their trailing slash.
pub fn resolve(
    provider_name: &str,
    keys: &CredentialKeys,
    api_keys: Option<&HashMap<String, String>>,
    settings: Option<&ProviderSettings>,
    server_env: &HashMap<String, String>,
) -> Credentials {
    let api_key = api_keys
        .and_then(|map| map.get(provider_name))
        .or_else(|| settings.and_then(|s| s.api_key.as_ref()))
        .or_else(|| server_env.get(keys.api_token_key))
        .map(String::as_str)
        .and_then(non_empty);

    let base_url = settings
        .and_then(|s| s.base_url.as_deref())
        .or_else(|| server_env.get(keys.base_url_key).map(String::as_str))
        .and_then(non_empty)
        .map(|url| url.trim_end_matches('/').to_string());

    Credentials {
        base_url,
        api_key: api_key.map(str::to_string),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}
