use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use service_client::RemoteCallError;
use thiserror::Error;

/// Errors raised while building or serving the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Property {0} is not refreshable")]
    NotRefreshable(String),

    #[error("Failed to set up remote client: {0}")]
    Client(#[from] RemoteCallError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match self {
            GatewayError::NotRefreshable(_) => StatusCode::BAD_REQUEST,
            GatewayError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
