//! Provider service status checks
//!
//! A [`StatusChecker`] probes a provider's public status page and API
//! endpoint, classifies each probe as ok / error / unreachable, and reduces
//! the pair into a three-way [`ServiceStatus`] with a human-readable
//! incident list. API reachability dominates the verdict: an unreachable
//! API is always `down`, the status page is advisory.
//!
//! `check_status` never fails; anything unexpected inside the check becomes
//! a `down` result carrying a "Service check failed" incident.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

pub mod moonshot;

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of one reachability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointHealth {
    /// HTTP success response
    Ok,
    /// Response received, non-success status
    Error,
    /// Transport failure or timeout
    Unreachable,
}

/// Overall provider service status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Both endpoints healthy
    Operational,
    /// Incidents present but the API is reachable
    Degraded,
    /// API endpoint unreachable
    Down,
}

/// Result of one status check. Plain data, produced fresh on every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheckResult {
    /// Overall verdict
    pub status: ServiceStatus,
    /// Human-readable summary
    pub message: String,
    /// Incident descriptions, in probe order
    pub incidents: Vec<String>,
}

/// Endpoints one checker probes. Supplied at construction, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCheckerConfig {
    /// Public status page URL
    pub status_url: String,
    /// API endpoint URL
    pub api_url: String,
}

/// Probes a provider's endpoints and classifies the results.
#[derive(Debug, Clone)]
pub struct StatusChecker {
    config: StatusCheckerConfig,
    http_client: reqwest::Client,
}

impl StatusChecker {
    /// Create a checker with a default HTTP client.
    pub fn new(config: StatusCheckerConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a checker with a caller-configured HTTP client.
    pub fn with_client(config: StatusCheckerConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// The configured endpoints.
    pub fn config(&self) -> &StatusCheckerConfig {
        &self.config
    }

    /// Probe both endpoints and classify. Never fails.
    pub async fn check_status(&self) -> StatusCheckResult {
        match self.try_check_status().await {
            Ok(result) => result,
            Err(e) => StatusCheckResult {
                status: ServiceStatus::Down,
                message: e.to_string(),
                incidents: vec!["Service check failed".to_string()],
            },
        }
    }

    async fn try_check_status(&self) -> Result<StatusCheckResult, LlmError> {
        let status_url = parse_url(&self.config.status_url)?;
        let api_url = parse_url(&self.config.api_url)?;

        // The probes are independent; run them concurrently.
        let (status_page, api) = tokio::join!(
            self.probe_endpoint(status_url),
            self.probe_endpoint(api_url)
        );

        Ok(classify(status_page, api))
    }

    /// One reachability probe. The response body is ignored.
    async fn probe_endpoint(&self, url: reqwest::Url) -> EndpointHealth {
        match self
            .http_client
            .get(url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => EndpointHealth::Ok,
            Ok(_) => EndpointHealth::Error,
            Err(_) => EndpointHealth::Unreachable,
        }
    }
}

fn parse_url(url: &str) -> Result<reqwest::Url, LlmError> {
    reqwest::Url::parse(url)
        .map_err(|e| LlmError::ConfigurationError(format!("Invalid endpoint URL {url}: {e}")))
}

/// Reduce the two probe outcomes into an overall verdict.
pub fn classify(status_page: EndpointHealth, api: EndpointHealth) -> StatusCheckResult {
    let mut incidents = Vec::new();

    if status_page == EndpointHealth::Unreachable {
        incidents.push("Status page unreachable".to_string());
    }

    match api {
        EndpointHealth::Unreachable => incidents.push("API endpoint unreachable".to_string()),
        EndpointHealth::Error => incidents.push("API endpoint returning errors".to_string()),
        EndpointHealth::Ok => {}
    }

    let status = if api == EndpointHealth::Unreachable {
        ServiceStatus::Down
    } else if !incidents.is_empty() {
        ServiceStatus::Degraded
    } else {
        ServiceStatus::Operational
    };

    let message = if status == ServiceStatus::Operational {
        "All systems operational".to_string()
    } else {
        format!("Issues detected: {}", incidents.join(", "))
    };

    StatusCheckResult {
        status,
        message,
        incidents,
    }
}
