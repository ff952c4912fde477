//! Gateway crate for the Metflix UI.
//!
//! Serves the home view of an authenticated member: a welcome message plus
//! recommendations fetched from a remote service under a timeout. Credentials
//! are checked against the membership registry on every request.

pub mod actuator;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod home;

pub use actuator::Environment;
pub use app::{AppState, build_router, router, security_chain};
pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use home::{HomeController, HomeView};
