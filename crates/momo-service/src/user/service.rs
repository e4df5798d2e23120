//! Database-backed [`UserController`].

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use momo_core::result::AppResult;
use momo_core::traits::{Repository, UserOwned};
use momo_core::types::UserId;
use momo_database::repositories::{
    CommentRepository, LikeRepository, PostRepository, UserRepository,
};
use momo_entity::{Comment, Like, Post, User, UserDraft};

use super::controller::{UserController, UserInput};
use crate::password::PasswordHasher;

/// Shared handle to the user store.
pub type UserStore = Arc<dyn Repository<User, UserId, UserDraft>>;

/// Implements user CRUD on top of the repositories.
#[derive(Clone)]
pub struct UserService {
    users: UserStore,
    posts: Arc<dyn UserOwned<Post>>,
    comments: Arc<dyn UserOwned<Comment>>,
    likes: Arc<dyn UserOwned<Like>>,
    hasher: PasswordHasher,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: UserStore,
        posts: Arc<dyn UserOwned<Post>>,
        comments: Arc<dyn UserOwned<Comment>>,
        likes: Arc<dyn UserOwned<Like>>,
    ) -> Self {
        Self {
            users,
            posts,
            comments,
            likes,
            hasher: PasswordHasher::new(),
        }
    }

    /// Builds the service over the PostgreSQL repositories.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(UserRepository::new(pool.clone())),
            Arc::new(PostRepository::new(pool.clone())),
            Arc::new(CommentRepository::new(pool.clone())),
            Arc::new(LikeRepository::new(pool)),
        )
    }

    async fn draft(&self, input: UserInput) -> AppResult<UserDraft> {
        let password_hash = self.hasher.hash_password_blocking(input.password).await?;
        Ok(UserDraft {
            name: input.name,
            email: input.email,
            password_hash,
        })
    }

    async fn owned_by<T>(
        &self,
        id: UserId,
        store: &dyn UserOwned<T>,
    ) -> AppResult<Option<Vec<T>>>
    where
        T: Send + Sync + 'static,
    {
        if self.users.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        store.find_by_user(id).await.map(Some)
    }
}

#[async_trait]
impl UserController for UserService {
    async fn get_users(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    async fn get_user(&self, id: UserId) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn create_user(&self, input: UserInput) -> AppResult<User> {
        let draft = self.draft(input).await?;
        let user = self.users.create(&draft).await?;
        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, input: UserInput) -> AppResult<Option<User>> {
        let draft = self.draft(input).await?;
        let updated = self.users.update(id, &draft).await?;
        match &updated {
            Some(user) => info!(user_id = %user.id, "User updated"),
            None => debug!(user_id = %id, "Update matched no user"),
        }
        Ok(updated)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<bool> {
        let deleted = self.users.delete(id).await?;
        if deleted {
            info!(user_id = %id, "User deleted");
        } else {
            debug!(user_id = %id, "Delete matched no user");
        }
        Ok(deleted)
    }

    async fn get_user_posts(&self, id: UserId) -> AppResult<Option<Vec<Post>>> {
        self.owned_by(id, self.posts.as_ref()).await
    }

    async fn get_user_comments(&self, id: UserId) -> AppResult<Option<Vec<Comment>>> {
        self.owned_by(id, self.comments.as_ref()).await
    }

    async fn get_user_likes(&self, id: UserId) -> AppResult<Option<Vec<Like>>> {
        self.owned_by(id, self.likes.as_ref()).await
    }

    async fn health_check(&self) -> AppResult<()> {
        let users = self.users.count().await?;
        debug!(users, "User store reachable");
        Ok(())
    }
}
