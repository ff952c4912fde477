//! Error types for the membership crate.
//!
//! A lookup miss is never an error here: `MemberStore::get` returns `None`
//! and the HTTP layer answers with an empty body. The variants below cover
//! the cases where a request is actually refused.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur while registering or serving members
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// The `user` key of a member was empty
    #[error("Member user must not be empty")]
    EmptyUsername,

    /// Request body could not be decoded into a Member
    #[error("Invalid member payload: {0}")]
    InvalidPayload(String),
}

impl MembershipError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            MembershipError::EmptyUsername => StatusCode::BAD_REQUEST,
            MembershipError::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for MembershipError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, MembershipError>;
