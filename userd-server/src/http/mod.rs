//! HTTP server layer
//!
//! Axum server with:
//! - Panic isolation (a panicking handler yields a JSON 500)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod panic;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use extractors::UserId;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
