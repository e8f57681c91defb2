//! Database layer - connection pool and user storage
//!
//! # Design Principles
//!
//! - Connection pool injected at startup - no global connection handle
//! - Parameterized statements only
//! - No retries: every fault surfaces to the caller, logged with context

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
