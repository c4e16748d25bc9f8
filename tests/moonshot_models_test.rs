//! Mock API tests for the Moonshot model catalog
//!
//! These tests use wiremock to simulate the OpenAI-compatible `GET /models`
//! route and exercise the merge and fallback behavior of the dynamic
//! catalog resolver.

use std::collections::HashMap;

use moonshot_llm::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(base_url: &str, api_key: Option<&str>) -> ProviderSettings {
    ProviderSettings {
        enabled: Some(true),
        base_url: Some(base_url.to_string()),
        api_key: api_key.map(str::to_string),
    }
}

/// A loopback URL with nothing listening behind it.
fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn create_models_response() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [
            { "id": "kimi-k2-7b", "context_length": 64000 },
            { "id": "new-model" }
        ]
    })
}

#[tokio::test]
async fn dynamic_models_merge_remote_catalog_into_static_one() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_models_response()))
        .mount(&mock_server)
        .await;

    let provider = MoonshotProvider::new();
    let settings = settings_for(&mock_server.uri(), Some("test-key"));
    let models = provider
        .dynamic_models(None, Some(&settings), &HashMap::new())
        .await;

    // Five static entries unchanged, one new dynamic entry appended.
    assert_eq!(models.len(), 6);

    let static_models = provider.static_models();
    assert_eq!(&models[..5], &static_models[..]);

    // The remote kimi-k2-7b entry must not overwrite the static one.
    let kimi = models.iter().find(|m| m.name == "kimi-k2-7b").unwrap();
    assert_eq!(kimi.max_token_allowed, 32_000);

    let appended = &models[5];
    assert_eq!(appended.name, "new-model");
    assert_eq!(appended.label, "new-model");
    assert_eq!(appended.provider, "Moonshot");
    assert_eq!(appended.max_token_allowed, 32_000);
}

#[tokio::test]
async fn non_success_response_falls_back_to_static_catalog() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let provider = MoonshotProvider::new();
    let settings = settings_for(&mock_server.uri(), Some("test-key"));
    let models = provider
        .dynamic_models(None, Some(&settings), &HashMap::new())
        .await;

    assert_eq!(models, provider.static_models());
}

#[tokio::test]
async fn malformed_response_body_falls_back_to_static_catalog() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "object": "list" })))
        .mount(&mock_server)
        .await;

    let provider = MoonshotProvider::new();
    let settings = settings_for(&mock_server.uri(), Some("test-key"));
    let models = provider
        .dynamic_models(None, Some(&settings), &HashMap::new())
        .await;

    assert_eq!(models, provider.static_models());
}

#[tokio::test]
async fn transport_failure_falls_back_to_static_catalog() {
    let provider = MoonshotProvider::new();
    let settings = settings_for(&unreachable_url(), Some("test-key"));
    let models = provider
        .dynamic_models(None, Some(&settings), &HashMap::new())
        .await;

    assert_eq!(models, provider.static_models());
}

#[tokio::test]
async fn missing_api_key_skips_the_network_call() {
    let mock_server = MockServer::start().await;

    // The short-circuit must not issue any request.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_models_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = MoonshotProvider::new();
    let settings = settings_for(&mock_server.uri(), None);
    let models = provider
        .dynamic_models(None, Some(&settings), &HashMap::new())
        .await;

    assert_eq!(models, provider.static_models());
    mock_server.verify().await;
}

#[tokio::test]
async fn missing_base_url_returns_the_static_catalog() {
    let provider = MoonshotProvider::new();

    let mut api_keys = HashMap::new();
    api_keys.insert("Moonshot".to_string(), "test-key".to_string());

    let models = provider
        .dynamic_models(Some(&api_keys), None, &HashMap::new())
        .await;

    assert_eq!(models, provider.static_models());
}

#[tokio::test]
async fn explicit_api_key_map_feeds_the_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .and(header("authorization", "Bearer key-from-map"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_models_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = MoonshotProvider::new();

    let mut api_keys = HashMap::new();
    api_keys.insert("Moonshot".to_string(), "key-from-map".to_string());

    let mut server_env = HashMap::new();
    server_env.insert("MOONSHOT_API_BASE_URL".to_string(), mock_server.uri());

    let models = provider
        .dynamic_models(Some(&api_keys), None, &server_env)
        .await;

    assert_eq!(models.len(), 6);
    mock_server.verify().await;
}

#[test]
fn model_instance_without_credentials_names_the_required_settings() {
    let provider = MoonshotProvider::new();
    let server_env = HashMap::new();

    let result = provider.model_instance(&ModelInstanceOptions {
        model: "moonshot-v1-8k",
        api_keys: None,
        provider_settings: None,
        server_env: &server_env,
    });

    let error = result.unwrap_err();
    assert!(matches!(error, LlmError::ConfigurationError(_)));
    let message = error.to_string();
    assert!(message.contains("MOONSHOT_API_KEY"));
    assert!(message.contains("MOONSHOT_API_BASE_URL"));
}

#[test]
fn model_instance_binds_exactly_the_resolved_credentials() {
    let provider = MoonshotProvider::new();
    let settings = settings_for("https://api.moonshot.ai/v1/", Some("sk-test"));
    let server_env = HashMap::new();

    let handle = provider
        .model_instance(&ModelInstanceOptions {
            model: "kimi-k2-32b",
            api_keys: None,
            provider_settings: Some(&settings),
            server_env: &server_env,
        })
        .unwrap();

    assert_eq!(handle.provider_id(), "Moonshot");
    assert_eq!(handle.model(), "kimi-k2-32b");
    assert_eq!(handle.base_url(), "https://api.moonshot.ai/v1");
    assert_eq!(handle.api_key(), "sk-test");
    assert_eq!(
        handle.chat_completions_url(),
        "https://api.moonshot.ai/v1/chat/completions"
    );
}
