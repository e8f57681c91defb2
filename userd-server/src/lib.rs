//! userd-server: HTTP CRUD service for user records
//!
//! Request pipeline: panic isolation -> handler -> data access layer ->
//! database -> JSON response.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryUserRepo, UserRepo, UserStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::User;
