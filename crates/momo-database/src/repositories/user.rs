//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use momo_core::error::{AppError, ErrorKind};
use momo_core::result::AppResult;
use momo_core::traits::Repository;
use momo_core::types::UserId;
use momo_entity::user::{User, UserDraft};

/// Unique index over `lower(email)`.
const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translate a failed insert/update into a conflict when the email is taken.
fn map_write_error(e: sqlx::Error, draft: &UserDraft, action: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
        {
            AppError::conflict(format!("Email '{}' is already in use", draft.email))
        }
        _ => AppError::with_source(ErrorKind::Database, format!("Failed to {action} user"), e),
    }
}

#[async_trait]
impl Repository<User, UserId, UserDraft> for UserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    async fn create(&self, draft: &UserDraft) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, draft, "create"))
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, \
                              email = $3, \
                              password_hash = $4, \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, draft, "update"))
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
