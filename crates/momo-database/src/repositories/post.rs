//! Post repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use momo_core::error::{AppError, ErrorKind};
use momo_core::result::AppResult;
use momo_core::traits::UserOwned;
use momo_core::types::UserId;
use momo_entity::post::{Post, PostDraft};

/// Repository for posts.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a post.
    pub async fn create(&self, draft: &PostDraft) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, content, user_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(draft.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }
}

#[async_trait]
impl UserOwned<Post> for PostRepository {
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE user_id = $1 ORDER BY id ASC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list posts by user", e)
            })
    }
}
