//! Like repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use momo_core::error::{AppError, ErrorKind};
use momo_core::result::AppResult;
use momo_core::traits::UserOwned;
use momo_core::types::UserId;
use momo_entity::like::{Like, LikeDraft};

/// Repository for likes.
#[derive(Debug, Clone)]
pub struct LikeRepository {
    pool: PgPool,
}

impl LikeRepository {
    /// Create a new like repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a like.
    pub async fn create(&self, draft: &LikeDraft) -> AppResult<Like> {
        sqlx::query_as::<_, Like>("INSERT INTO likes (user_id, post_id) VALUES ($1, $2) RETURNING *")
            .bind(draft.user_id)
            .bind(draft.post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create like", e))
    }
}

#[async_trait]
impl UserOwned<Like> for LikeRepository {
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Like>> {
        sqlx::query_as::<_, Like>("SELECT * FROM likes WHERE user_id = $1 ORDER BY id ASC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list likes by user", e)
            })
    }
}
