//! Gateway configuration.

use std::time::Duration;

use service_client::{DEFAULT_MEMBER_LOOKUP_TIMEOUT, DEFAULT_RECOMMENDATION_TIMEOUT};

pub const DEFAULT_MEMBER_API: &str = "http://localhost:4444";
pub const DEFAULT_RECOMMENDATION_API: &str = "http://localhost:3333";
pub const DEFAULT_MESSAGE: &str = "Welcome to Metflix!";

/// Where the gateway finds its collaborators and what it says to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL of the membership registry (`member.api`)
    pub member_api: String,
    /// Base URL of the recommendation service (`recommendation.api`)
    pub recommendation_api: String,
    /// Welcome text on the home view (`message`); refreshable at runtime
    pub message: String,
    /// Bound on a recommendation fetch before falling back to an empty list
    pub recommendation_timeout: Duration,
    /// Bound on the member lookup made for every authentication attempt
    pub member_lookup_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            member_api: DEFAULT_MEMBER_API.to_string(),
            recommendation_api: DEFAULT_RECOMMENDATION_API.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            recommendation_timeout: DEFAULT_RECOMMENDATION_TIMEOUT,
            member_lookup_timeout: DEFAULT_MEMBER_LOOKUP_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.member_api, "http://localhost:4444");
        assert_eq!(config.recommendation_api, "http://localhost:3333");
        assert_eq!(config.message, "Welcome to Metflix!");
        assert_eq!(config.recommendation_timeout, Duration::from_millis(5000));
        assert_eq!(config.member_lookup_timeout, Duration::from_millis(5000));
    }
}
