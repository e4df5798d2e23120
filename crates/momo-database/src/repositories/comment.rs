//! Comment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use momo_core::error::{AppError, ErrorKind};
use momo_core::result::AppResult;
use momo_core::traits::UserOwned;
use momo_core::types::UserId;
use momo_entity::comment::{Comment, CommentDraft};

/// Repository for comments.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a comment.
    pub async fn create(&self, draft: &CommentDraft) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (content, user_id, post_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&draft.content)
        .bind(draft.user_id)
        .bind(draft.post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }
}

#[async_trait]
impl UserOwned<Comment> for CommentRepository {
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE user_id = $1 ORDER BY id ASC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list comments by user", e)
            })
    }
}
