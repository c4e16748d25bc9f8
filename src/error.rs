//! Error Handling Module
//!
//! Error taxonomy for the provider integration:
//! - Configuration problems (missing base URL / API key) surface as
//!   [`LlmError::ConfigurationError`] or [`LlmError::MissingApiKey`].
//! - Transport-level failures (connect, timeout) become
//!   [`LlmError::ConnectionError`]; other HTTP-client failures become
//!   [`LlmError::HttpError`].
//! - A response that arrived with a non-success status is
//!   [`LlmError::ApiError`]; a body that does not match the expected shape is
//!   [`LlmError::ParseError`].
//!
//! Read paths (status checks, model listing) catch these internally and
//! degrade to safe defaults; only model instantiation propagates them.

use thiserror::Error;

/// Errors produced by provider integrations.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Provider configuration is incomplete or invalid
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// API key is required but was not resolved from any source
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// HTTP client failure that is not a connectivity problem
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Network-level failure: connect error or timeout
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response arrived with a non-success HTTP status
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Status text or error body excerpt
        message: String,
    },
}

impl LlmError {
    /// Create an [`LlmError::ApiError`] from a status code and message.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
        }
    }

    /// Whether this error was caused by the endpoint being unreachable
    /// rather than by the response it produced.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::ConnectionError(err.to_string())
        } else if let Some(status) = err.status() {
            Self::api_error(status.as_u16(), err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
