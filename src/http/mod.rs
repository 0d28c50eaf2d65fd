//! HTTP server module.
//!
//! Plain HTTP only; TLS is expected to terminate in front of the service.
//! The server shuts down gracefully on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
