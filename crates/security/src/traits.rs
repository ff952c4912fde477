//! Core traits for the security chain.
//!
//! This module defines the Interceptor trait that allows composable,
//! ordered access rules to be evaluated against an inbound request.

use async_trait::async_trait;
use http::{HeaderMap, Method, header};

use crate::error::AuthError;
use crate::principal::Principal;

/// The parts of an HTTP request the interceptors look at.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            authorization: None,
        }
    }

    pub fn with_authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    /// Capture method, path and the `Authorization` header.
    ///
    /// A header that is not valid visible ASCII is treated as absent.
    pub fn from_parts(method: &Method, path: &str, headers: &HeaderMap) -> Self {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        Self {
            method: method.clone(),
            path: path.to_string(),
            authorization,
        }
    }
}

/// Outcome of a single interceptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the request through without an identity
    Permit,
    /// Let the request through as this principal
    Authenticated(Principal),
    /// Stop here and reject
    Deny(AuthError),
    /// No opinion, ask the next interceptor
    Delegate,
}

/// Core trait for access rules.
///
/// All interceptors must implement this trait to be used in the
/// `InterceptorChain`. `Send + Sync` lets one chain serve every request.
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// Returns the name of this interceptor (for logging/debugging)
    fn name(&self) -> &str;

    /// Decide what happens to `request`.
    async fn intercept(&self, request: &RequestContext) -> Decision;
}
