//! axum glue for the security chain.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use security::{Access, AuthError, InterceptorChain, RequestContext};

/// Realm announced in `WWW-Authenticate`
pub const REALM: &str = "Realm";

/// Evaluate the chain for every request. Authenticated requests carry their
/// `Principal` in the request extensions; rejected ones get a 401.
pub async fn require_authentication(
    State(chain): State<Arc<InterceptorChain>>,
    mut request: Request,
    next: Next,
) -> Response {
    let context =
        RequestContext::from_parts(request.method(), request.uri().path(), request.headers());

    match chain.evaluate(&context).await {
        Ok(Access::Anonymous) => next.run(request).await,
        Ok(Access::Authenticated(principal)) => {
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        Err(err) => unauthorized(&err),
    }
}

fn unauthorized(err: &AuthError) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, format!("Basic realm=\"{}\"", REALM))],
        Json(json!({
            "error": "Unauthorized",
            "message": err.public_message(),
        })),
    )
        .into_response()
}
