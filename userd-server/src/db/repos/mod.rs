//! User storage
//!
//! Every backend honours the same contract:
//! - `create` assigns the id and returns the stored record
//! - `get` distinguishes a missing row (`DbError::NotFound`) from other faults
//! - `update`/`delete` succeed silently when no row matches the id
//! - `list` validates the window and never returns a null collection

pub mod memory;
pub mod users;

use async_trait::async_trait;

use crate::models::{User, ValidationError};

pub use memory::MemoryUserRepo;
pub use users::UserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// User persistence operations (object safe, shared across requests)
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user, returning it with the assigned id.
    async fn create(&self, user: User) -> Result<User, DbError>;

    /// Fetch a user by id.
    async fn get(&self, id: i64) -> Result<User, DbError>;

    /// Overwrite name/age of the row matching `user.id`.
    async fn update(&self, user: &User) -> Result<(), DbError>;

    /// Remove the row with the given id.
    async fn delete(&self, id: i64) -> Result<(), DbError>;

    /// Rows in storage order, `limit` at most, skipping `offset`.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, DbError>;
}
