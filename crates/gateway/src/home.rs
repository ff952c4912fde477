//! # Home view
//!
//! Composes the page a member sees after signing in:
//! 1. Read the current welcome message
//! 2. Fetch the member's recommendations (empty if the service misbehaves)
//! 3. Assemble the view model
//!
//! Rendering the view model is left to the client; the gateway serves it
//! as JSON.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use security::Principal;
use service_client::{Movie, RecommendationClient};

use crate::actuator::Environment;

/// View model for `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeView {
    pub message: String,
    pub username: String,
    pub recommendations: Vec<Movie>,
}

/// Builds the home view for an authenticated principal
#[derive(Clone)]
pub struct HomeController {
    recommendations: RecommendationClient,
    env: Arc<Environment>,
}

impl HomeController {
    pub fn new(recommendations: RecommendationClient, env: Arc<Environment>) -> Self {
        Self {
            recommendations,
            env,
        }
    }

    /// Main entry point: the home view for `principal`.
    ///
    /// Never fails; a broken recommendation service shows up as an empty list.
    pub async fn home(&self, principal: &Principal) -> HomeView {
        let start_time = Instant::now();
        let username = principal.name().to_string();

        let recommendations = self.recommendations.get_recommendations(&username).await;
        info!(
            "Home view for {} with {} recommendations in {:.2?}",
            username,
            recommendations.len(),
            start_time.elapsed()
        );

        HomeView {
            message: self.env.message(),
            username,
            recommendations,
        }
    }
}

/// `GET /`; the security middleware has already attached the principal.
pub async fn home(
    State(controller): State<HomeController>,
    Extension(principal): Extension<Principal>,
) -> Json<HomeView> {
    Json(controller.home(&principal).await)
}
