//! Client for the remote recommendation service.

use std::time::Duration;

use reqwest::Url;
use tracing::{debug, info};

use crate::endpoint::{join_segments, parse_base_url, success_body, transport_error};
use crate::error::Result;
use crate::resilience::call_with_timeout;
use crate::types::Movie;

/// Default bound on a recommendation fetch
pub const DEFAULT_RECOMMENDATION_TIMEOUT: Duration = Duration::from_millis(5000);

/// Fetches recommended movies for a member.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    http: reqwest::Client,
    base: Url,
    timeout: Duration,
}

impl RecommendationClient {
    /// Create a client for the service at `base`
    /// (e.g., "http://localhost:3333").
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let base = parse_base_url(base)?;
        info!("Recommendation service at {} (timeout {:?})", base, timeout);
        Ok(Self {
            http: reqwest::Client::new(),
            base,
            timeout,
        })
    }

    /// Recommendations for `username`, or an empty list if the service is
    /// slow, unreachable, or answers with an error.
    ///
    /// Never fails and never takes much longer than the configured timeout.
    pub async fn get_recommendations(&self, username: &str) -> Vec<Movie> {
        let client = self.clone();
        let username = username.to_string();
        call_with_timeout(
            "getRecommendations",
            self.timeout,
            async move { client.try_get_recommendations(&username).await },
            |_failure| Vec::new(),
        )
        .await
    }

    /// The bare fetch with no timeout or fallback.
    ///
    /// The movies are returned exactly as the remote sent them, order and
    /// duplicates included.
    pub async fn try_get_recommendations(&self, username: &str) -> Result<Vec<Movie>> {
        let url = join_segments(&self.base, &["api", "recommendations", username])?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(transport_error(&url))?;
        let body = success_body(&url, response).await?;
        let movies: Vec<Movie> = serde_json::from_str(&body)?;

        debug!("Received {} recommendations for {}", movies.len(), username);
        Ok(movies)
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
