//! # Moonshot LLM - Moonshot AI (Kimi) Provider Integration
//!
//! This crate implements the Moonshot AI provider for a multi-provider chat
//! application: the static and dynamic model catalog, layered credential
//! resolution, an OpenAI-compatible model handle factory, and a service
//! status checker for the provider's public endpoints.
//!
#![deny(unsafe_code)]
//! ## Design
//!
//! - **Capability trait**: every provider implements [`ProviderIntegration`]
//!   (static models, dynamic models, model instantiation, credential keys);
//!   consumers dispatch through the trait, not concrete types.
//! - **Safe degradation**: the read paths never fail. A broken network, a
//!   missing API key or a malformed provider response all degrade to the
//!   built-in model catalog or a `down` status instead of an error.
//! - **Layered configuration**: credentials resolve from an explicit API-key
//!   map, then per-provider settings, then the server environment, using the
//!   provider's fixed key names (`MOONSHOT_API_BASE_URL`, `MOONSHOT_API_KEY`).
//! - **Plain data out**: [`StatusCheckResult`] and [`ModelInfo`] are
//!   serializable records, ready for a UI or a log line.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use moonshot_llm::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = MoonshotProvider::new();
//!
//!     let mut server_env = HashMap::new();
//!     server_env.insert("MOONSHOT_API_BASE_URL".to_string(), "https://api.moonshot.ai/v1".to_string());
//!     server_env.insert("MOONSHOT_API_KEY".to_string(), "sk-...".to_string());
//!
//!     // Static catalog merged with whatever the API reports.
//!     let models = provider.dynamic_models(None, None, &server_env).await;
//!     for model in &models {
//!         println!("{} ({} tokens)", model.label, model.max_token_allowed);
//!     }
//!
//!     // Three-way service status for the provider dashboard.
//!     let status = moonshot_llm::status::moonshot::checker().check_status().await;
//!     println!("{}: {}", provider.name(), status.message);
//! }
//! ```

pub mod credentials;
pub mod error;
pub mod openai_like;
pub mod provider;
pub mod providers;
pub mod registry;
pub mod status;
pub mod types;

// Re-exports for the public API
pub use error::LlmError;
pub use openai_like::OpenAiLikeModel;
pub use provider::{ModelInstanceOptions, ProviderIntegration};
pub use providers::moonshot::MoonshotProvider;
pub use registry::ProviderRegistry;
pub use status::{
    EndpointHealth, ServiceStatus, StatusCheckResult, StatusChecker, StatusCheckerConfig,
};
pub use types::{ModelInfo, ProviderSettings};

/// Commonly used types, one import away.
pub mod prelude {
    pub use crate::credentials::{CredentialKeys, Credentials};
    pub use crate::error::LlmError;
    pub use crate::openai_like::OpenAiLikeModel;
    pub use crate::provider::{ModelInstanceOptions, ProviderIntegration};
    pub use crate::providers::moonshot::MoonshotProvider;
    pub use crate::registry::{ProviderRegistry, default_registry, get_provider};
    pub use crate::status::{
        EndpointHealth, ServiceStatus, StatusCheckResult, StatusChecker, StatusCheckerConfig,
    };
    pub use crate::types::{ModelInfo, ProviderSettings};
}
