//! HTTP server implementation
//!
//! This module provides the HTTP server, its middleware and routes.

pub mod extractors;
pub mod middleware;
pub mod routes;

pub mod builder;
pub mod server;
pub mod state;

pub use builder::{ServerBuilder, run_server};
pub use extractors::CurrentPrincipal;
pub use server::HttpServer;
pub use state::AppState;
