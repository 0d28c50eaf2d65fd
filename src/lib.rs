//! Sample App: a minimal HTTP service for developer-portal deployment testing.
//!
//! Serves a fixed greeting on `/` and a liveness probe on `/health`.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use routes::create_router;
