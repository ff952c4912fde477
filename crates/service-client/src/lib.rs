//! HTTP clients for the Metflix services.
//!
//! This crate provides:
//! - `call_with_timeout`, a reusable timeout-and-fallback combinator
//! - `RecommendationClient`, which fetches movies under that combinator
//! - `MemberClient`, which looks up and registers members
//!
//! ## Example Usage
//! ```ignore
//! use service_client::{RecommendationClient, DEFAULT_RECOMMENDATION_TIMEOUT};
//!
//! let client = RecommendationClient::new("http://localhost:3333", DEFAULT_RECOMMENDATION_TIMEOUT)?;
//!
//! // Never fails: an unreachable service yields an empty list
//! let movies = client.get_recommendations("making").await;
//! ```

pub mod endpoint;
pub mod error;
pub mod member;
pub mod recommendation;
pub mod resilience;
pub mod types;

// Re-export main types
pub use error::{RemoteCallError, Result};
pub use member::{DEFAULT_MEMBER_LOOKUP_TIMEOUT, MemberClient};
pub use recommendation::{DEFAULT_RECOMMENDATION_TIMEOUT, RecommendationClient};
pub use resilience::{CallFailure, call_with_timeout};
pub use types::Movie;
