//! Wiring of the gateway router.

use std::sync::Arc;

use axum::Router;
use axum::extract::FromRef;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::info;

use security::interceptors::{DenyAnonymous, HttpBasicAuthentication, PermitPaths};
use security::{InterceptorChain, MemberUserDetailsService, UserDetailsService};
use service_client::{MemberClient, RecommendationClient};

use crate::actuator::{self, Environment};
use crate::auth::require_authentication;
use crate::config::GatewayConfig;
use crate::error::Result;
use crate::home::{self, HomeController};

/// Paths reachable without credentials
pub const ANONYMOUS_PATHS: &[&str] = &["/actuator/env", "/actuator/refresh", "/actuator/health"];

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub home: HomeController,
    pub env: Arc<Environment>,
}

impl FromRef<AppState> for HomeController {
    fn from_ref(state: &AppState) -> Self {
        state.home.clone()
    }
}

impl FromRef<AppState> for Arc<Environment> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.env)
    }
}

/// The access rules, evaluated in order:
/// actuator paths are open, Basic credentials are checked against
/// `user_details`, everything else is denied.
pub fn security_chain(user_details: impl UserDetailsService + 'static) -> InterceptorChain {
    InterceptorChain::new()
        .add_interceptor(PermitPaths::new(ANONYMOUS_PATHS.iter().copied()))
        .add_interceptor(HttpBasicAuthentication::new(user_details))
        .add_interceptor(DenyAnonymous)
}

/// Assemble the gateway from its configuration.
pub fn build_router(config: &GatewayConfig) -> Result<Router> {
    let recommendations =
        RecommendationClient::new(&config.recommendation_api, config.recommendation_timeout)?;
    let members = MemberClient::new(&config.member_api, config.member_lookup_timeout)?;
    info!("Member registry at {}", members.base_url());

    let env = Arc::new(Environment::new(config));
    let state = AppState {
        home: HomeController::new(recommendations, Arc::clone(&env)),
        env,
    };
    let chain = security_chain(MemberUserDetailsService::new(members));

    Ok(router(state, Arc::new(chain)))
}

/// Routes behind the security middleware, with request tracing outermost.
pub fn router(state: AppState, chain: Arc<InterceptorChain>) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/actuator/health", get(actuator::health))
        .route("/actuator/env", get(actuator::show_env).post(actuator::stage_env))
        .route("/actuator/refresh", post(actuator::refresh))
        .layer(from_fn_with_state(chain, require_authentication))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
