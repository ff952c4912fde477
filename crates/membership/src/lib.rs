//! # Membership Crate
//!
//! The member registry: owns the mapping from a username to a [`Member`]
//! record and exposes register/lookup over HTTP.
//!
//! ## Main Components
//!
//! - **types**: `Member` and the seed records
//! - **store**: `MemberStore`, the lock-guarded in-memory map
//! - **api**: axum router for `/api/members`
//! - **error**: error types for registration
//!
//! ## Example Usage
//!
//! ```ignore
//! use membership::{Member, MemberStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemberStore::with_seed_members());
//! store.register(Member::new("alice", Some(25)))?;
//!
//! let app = membership::api::router(store);
//! axum::serve(listener, app).await?;
//! ```

// Public modules
pub mod api;
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{MembershipError, Result};
pub use store::MemberStore;
pub use types::{Member, Username, seed_members};
