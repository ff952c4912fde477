//! Request security for the Metflix gateway.
//!
//! This crate provides:
//! - Interceptor trait and implementations for access rules
//! - InterceptorChain for composing rules in order
//! - UserDetailsService and the member-registry backed implementation
//!
//! ## Architecture
//! Each request is evaluated against the chain:
//! 1. `PermitPaths` lets anonymous requests reach the actuator endpoints
//! 2. `HttpBasicAuthentication` checks Basic credentials against the registry
//! 3. `DenyAnonymous` rejects whatever is left
//!
//! ## Example Usage
//! ```ignore
//! use security::interceptors::*;
//! use security::{InterceptorChain, MemberUserDetailsService};
//!
//! let chain = InterceptorChain::new()
//!     .add_interceptor(PermitPaths::new(["/actuator/health"]))
//!     .add_interceptor(HttpBasicAuthentication::new(MemberUserDetailsService::new(members)))
//!     .add_interceptor(DenyAnonymous);
//!
//! match chain.evaluate(&request).await {
//!     Ok(Access::Authenticated(principal)) => { /* ... */ }
//!     Ok(Access::Anonymous) => { /* ... */ }
//!     Err(err) => { /* 401 */ }
//! }
//! ```

pub mod error;
pub mod interceptor_chain;
pub mod interceptors;
pub mod principal;
pub mod traits;
pub mod user_details;

// Re-export main types
pub use error::{AuthError, Result};
pub use interceptor_chain::{Access, InterceptorChain};
pub use principal::{Authority, Principal, UserDetails};
pub use traits::{Decision, Interceptor, RequestContext};
pub use user_details::{MemberUserDetailsService, STAND_IN_PASSWORD, UserDetailsService};
