//! Generic repository traits for database access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::UserId;

/// Generic CRUD repository trait.
///
/// `Draft` is the insert/update payload for the entity (everything except
/// the system-assigned id and timestamps). Entity-specific query methods
/// live on the concrete repository structs.
#[async_trait]
pub trait Repository<Entity, Id, Draft>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
    Draft: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Return every entity, ordered by primary key.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Insert a new entity and return it.
    async fn create(&self, draft: &Draft) -> AppResult<Entity>;

    /// Overwrite an existing entity. Returns `None` if no row matched.
    async fn update(&self, id: Id, draft: &Draft) -> AppResult<Option<Entity>>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: Id) -> AppResult<bool>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}

/// Read access to rows that reference a user.
#[async_trait]
pub trait UserOwned<Entity>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
{
    /// Return every row belonging to the user, ordered by primary key.
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Entity>>;
}
