//! MySQL-backed user repository
//!
//! Statements are parameterized and scoped to a single call; pooled
//! connections return to the pool on every exit path when dropped.

use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool};

use super::{DbError, UserStore};
use crate::models::validation::validate_window;
use crate::models::{User, ValidationError};

const INSERT_USER: &str = "INSERT INTO users (name, age) VALUES (?, ?)";
const LAST_INSERT_ID: &str = "SELECT CAST(LAST_INSERT_ID() AS SIGNED)";
const SELECT_USER: &str = "SELECT name, CAST(IFNULL(age, 0) AS SIGNED) AS age FROM users WHERE id = ?";
const UPDATE_USER: &str = "UPDATE users SET name = ?, age = ? WHERE id = ?";
const DELETE_USER: &str = "DELETE FROM users WHERE id = ?";
const SELECT_USERS: &str = "SELECT CAST(id AS SIGNED) AS id, name, CAST(IFNULL(age, 0) AS SIGNED) AS age \
     FROM users LIMIT ? OFFSET ?";

/// Row shape for the single-user select
#[derive(Debug, FromRow)]
struct UserFields {
    name: String,
    age: i64,
}

/// Row shape for the windowed select
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    age: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            age: row.age,
        }
    }
}

/// User repository over an owned pool handle (cheap to clone, thread safe)
#[derive(Debug, Clone)]
pub struct UserRepo {
    pool: MySqlPool,
}

impl UserRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Shared precondition for every operation: a usable connection.
    fn validate_input(&self, operation: &'static str) -> Result<(), ValidationError> {
        if self.pool.is_closed() {
            let err = ValidationError::MissingConnection;
            tracing::warn!(operation, "{}", err);
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepo {
    /// Insert, then read the generated id back on the same connection.
    async fn create(&self, mut user: User) -> Result<User, DbError> {
        self.validate_input("create")?;

        let mut conn = self.pool.acquire().await.inspect_err(|e| {
            tracing::error!(operation = "create", error = %e, "failed to acquire connection");
        })?;

        sqlx::query(INSERT_USER)
            .bind(&user.name)
            .bind(user.age)
            .execute(&mut *conn)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    operation = "create",
                    user.name = %user.name,
                    user.age = user.age,
                    error = %e,
                    "failed to insert user"
                );
            })?;

        user.id = sqlx::query_scalar(LAST_INSERT_ID)
            .fetch_one(&mut *conn)
            .await
            .inspect_err(|e| {
                tracing::error!(operation = "create", error = %e, "failed to read last insert id");
            })?;

        Ok(user)
    }

    async fn get(&self, id: i64) -> Result<User, DbError> {
        self.validate_input("get")?;

        let fields: Option<UserFields> = sqlx::query_as(SELECT_USER)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .inspect_err(|e| {
                tracing::error!(operation = "get", user.id = id, error = %e, "failed to select user");
            })?;

        let Some(fields) = fields else {
            tracing::info!(operation = "get", user.id = id, "user not found");
            return Err(DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            });
        };

        Ok(User {
            id,
            name: fields.name,
            age: fields.age,
        })
    }

    /// Zero rows affected is not an error.
    async fn update(&self, user: &User) -> Result<(), DbError> {
        self.validate_input("update")?;

        sqlx::query(UPDATE_USER)
            .bind(&user.name)
            .bind(user.age)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    operation = "update",
                    user.id = user.id,
                    user.name = %user.name,
                    user.age = user.age,
                    error = %e,
                    "failed to update user"
                );
            })?;

        Ok(())
    }

    /// Zero rows affected is not an error.
    async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.validate_input("delete")?;

        sqlx::query(DELETE_USER)
            .bind(id)
            .execute(&self.pool)
            .await
            .inspect_err(|e| {
                tracing::error!(operation = "delete", user.id = id, error = %e, "failed to delete user");
            })?;

        Ok(())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, DbError> {
        self.validate_input("list")?;
        validate_window(offset, limit)?;

        let rows: Vec<UserRow> = sqlx::query_as(SELECT_USERS)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    operation = "list",
                    count = limit,
                    offset,
                    error = %e,
                    "failed to query users"
                );
            })?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
