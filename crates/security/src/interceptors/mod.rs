//! Interceptor implementations for the security chain.
//!
//! This module contains all the concrete interceptors that can be
//! composed into an InterceptorChain.

pub mod deny_anonymous;
pub mod http_basic;
pub mod permit_paths;

// Re-export for convenience
pub use deny_anonymous::DenyAnonymous;
pub use http_basic::{HttpBasicAuthentication, parse_basic_credentials};
pub use permit_paths::PermitPaths;
