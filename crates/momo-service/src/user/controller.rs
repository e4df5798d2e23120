//! The operations the HTTP layer performs against users.
//!
//! Handlers only ever see `Arc<dyn UserController>`, so route tests can
//! swap in the generated `MockUserController` and never touch a database.
//! Absence is reported through the return value (`None` / `false`), not
//! through `ErrorKind::NotFound`; the route layer decides the status code.

use async_trait::async_trait;

use momo_core::result::AppResult;
use momo_core::types::UserId;
use momo_entity::{Comment, Like, Post, User};

/// A validated create/update payload. The password is still plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// CRUD over users plus reads of what each user owns.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait UserController: Send + Sync + 'static {
    /// Every user, ordered by id.
    async fn get_users(&self) -> AppResult<Vec<User>>;

    /// The user with this id, if any.
    async fn get_user(&self, id: UserId) -> AppResult<Option<User>>;

    /// Create a user and return it.
    async fn create_user(&self, input: UserInput) -> AppResult<User>;

    /// Overwrite a user. `None` when no user has this id.
    async fn update_user(&self, id: UserId, input: UserInput) -> AppResult<Option<User>>;

    /// Delete a user. `false` when no user has this id.
    async fn delete_user(&self, id: UserId) -> AppResult<bool>;

    /// The user's posts, or `None` when the user does not exist.
    async fn get_user_posts(&self, id: UserId) -> AppResult<Option<Vec<Post>>>;

    /// The user's comments, or `None` when the user does not exist.
    async fn get_user_comments(&self, id: UserId) -> AppResult<Option<Vec<Comment>>>;

    /// The user's likes, or `None` when the user does not exist.
    async fn get_user_likes(&self, id: UserId) -> AppResult<Option<Vec<Like>>>;

    /// Round-trip to the user store. `Err` when it cannot be reached.
    async fn health_check(&self) -> AppResult<()>;
}
