//! OpenAI-compatible model handle
//!
//! A [`OpenAiLikeModel`] is what [`crate::provider::ProviderIntegration::model_instance`]
//! returns: an immutable binding of `(base_url, api_key, model)` that the
//! chat executor feeds into the standard OpenAI-style routes. It performs no
//! requests itself and caches nothing.

use secrecy::{ExposeSecret, SecretString};

/// Handle for one model behind an OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct OpenAiLikeModel {
    provider_id: String,
    model: String,
    base_url: String,
    api_key: SecretString,
}

impl OpenAiLikeModel {
    /// Bind a handle to a provider endpoint and model.
    pub fn new(
        provider_id: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            provider_id: provider_id.into(),
            model: model.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Provider this handle belongs to.
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    /// Model identifier the handle is bound to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The bound API key.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Standard OpenAI-compatible chat route.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Standard OpenAI-compatible model listing route.
    pub fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_carries_its_binding() {
        let model = OpenAiLikeModel::new(
            "Moonshot",
            "https://api.moonshot.ai/v1",
            "sk-test",
            "moonshot-v1-8k",
        );

        assert_eq!(model.provider_id(), "Moonshot");
        assert_eq!(model.model(), "moonshot-v1-8k");
        assert_eq!(model.base_url(), "https://api.moonshot.ai/v1");
        assert_eq!(model.api_key(), "sk-test");
    }

    #[test]
    fn urls_are_built_from_a_normalized_base() {
        let model = OpenAiLikeModel::new("Moonshot", "https://api.moonshot.ai/v1/", "k", "m");

        assert_eq!(
            model.chat_completions_url(),
            "https://api.moonshot.ai/v1/chat/completions"
        );
        assert_eq!(model.models_url(), "https://api.moonshot.ai/v1/models");
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let model = OpenAiLikeModel::new("Moonshot", "https://api.moonshot.ai/v1", "sk-secret", "m");
        let debug = format!("{model:?}");
        assert!(!debug.contains("sk-secret"));
    }
}
