//! HTTP surface of the membership registry.
//!
//! | Method | Path                  | Response                                  |
//! |--------|-----------------------|-------------------------------------------|
//! | POST   | `/api/members`        | echoed member                             |
//! | GET    | `/api/members/:user`  | member JSON, or an empty 200 when absent  |
//! | GET    | `/actuator/health`    | `{"status":"UP"}`                         |

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::MembershipError;
use crate::store::MemberStore;
use crate::types::Member;

/// Build the registry router over a shared store.
pub fn router(store: Arc<MemberStore>) -> Router {
    Router::new()
        .route("/api/members", post(register))
        .route("/api/members/:user", get(lookup))
        .route("/actuator/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

async fn register(
    State(store): State<Arc<MemberStore>>,
    payload: Result<Json<Member>, JsonRejection>,
) -> Result<Json<Member>, MembershipError> {
    let Json(member) = payload.map_err(|e| MembershipError::InvalidPayload(e.body_text()))?;
    let member = store.register(member)?;
    info!(user = %member.user, "Member registered");
    Ok(Json(member))
}

async fn lookup(State(store): State<Arc<MemberStore>>, Path(user): Path<String>) -> Response {
    match store.get(&user) {
        Some(member) => Json(member).into_response(),
        // Absence is an empty body, the caller decides what it means
        None => StatusCode::OK.into_response(),
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "UP" }))
}
