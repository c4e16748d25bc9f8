//! Moonshot service status endpoints

use super::{StatusChecker, StatusCheckerConfig};
use crate::providers::moonshot::DEFAULT_BASE_URL;

/// Public status page.
pub const STATUS_PAGE_URL: &str = "https://status.moonshot.ai";

/// Checker for the Moonshot status page and API endpoint.
pub fn checker() -> StatusChecker {
    StatusChecker::new(StatusCheckerConfig {
        status_url: STATUS_PAGE_URL.to_string(),
        api_url: DEFAULT_BASE_URL.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_checker_points_at_the_moonshot_endpoints() {
        let checker = checker();
        assert_eq!(checker.config().status_url, STATUS_PAGE_URL);
        assert_eq!(checker.config().api_url, DEFAULT_BASE_URL);
    }
}
