//! Like entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use momo_core::types::{LikeId, PostId, UserId};

/// A user's like of a post. A user may like the same post more than once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: LikeId,
    pub user_id: UserId,
    pub post_id: PostId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values for inserting a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeDraft {
    pub user_id: UserId,
    pub post_id: PostId,
}
