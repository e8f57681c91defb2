//! In-memory user repository
//!
//! Same observable contract as the MySQL repository. Used for local
//! development (`userd serve --in-memory`) and for HTTP tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, UserStore};
use crate::models::validation::validate_window;
use crate::models::User;

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, User>,
}

/// In-memory user table with auto-increment ids starting at 1
#[derive(Debug, Default)]
pub struct MemoryUserRepo {
    table: RwLock<Table>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserRepo {
    async fn create(&self, mut user: User) -> Result<User, DbError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        user.id = table.last_id;
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get(&self, id: i64) -> Result<User, DbError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| {
                tracing::info!(operation = "get", user.id = id, "user not found");
                DbError::NotFound {
                    resource: "user",
                    id: id.to_string(),
                }
            })
    }

    async fn update(&self, user: &User) -> Result<(), DbError> {
        if let Some(row) = self.table.write().await.rows.get_mut(&user.id) {
            row.name.clone_from(&user.name);
            row.age = user.age;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, DbError> {
        validate_window(offset, limit)?;

        // Both bounds are non-negative after validation.
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }
}
