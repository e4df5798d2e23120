//! # momo-entity
//!
//! Domain entity models for Momo. Every struct here is either a database
//! row (deriving `sqlx::FromRow`) or the draft used to insert/overwrite
//! one. Rows serialize with camelCase field names (`userId`, `createdAt`).

pub mod comment;
pub mod like;
pub mod post;
pub mod user;

pub use comment::{Comment, CommentDraft};
pub use like::{Like, LikeDraft};
pub use post::{Post, PostDraft};
pub use user::{User, UserDraft};
