use async_trait::async_trait;

use crate::user::User;

use super::{Item, Result};

/// Single-item operations against a generic key-value backend.
///
/// This is the narrow capability the user store needs and nothing more: no
/// scans, no queries, no conditions. Implementations exist for DynamoDB and
/// for an in-memory map.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Writes `item`, replacing any existing item with the same key.
    async fn put_item(&self, table: &str, item: Item) -> Result<()>;

    /// Reads the item stored under `key`, if any.
    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>>;

    /// Sets each attribute in `updates` on the item stored under `key`.
    ///
    /// Attributes not named in `updates` are left as they are. If no item
    /// exists it is created from `key` and `updates`.
    async fn update_item(&self, table: &str, key: Item, updates: Item) -> Result<()>;

    /// Removes the item stored under `key`. Removing a missing item succeeds.
    async fn delete_item(&self, table: &str, key: Item) -> Result<()>;
}

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user, overwriting any record with the same ID.
    async fn create_user(&self, user: &User) -> Result<()>;

    /// Gets a user by ID. Fails with `NotFound` if there is none.
    async fn get_user(&self, user_id: &str) -> Result<User>;

    /// Overwrites name, email and date of birth of the user with this ID.
    async fn update_user(&self, user_id: &str, user: &User) -> Result<()>;

    /// Deletes a user by ID. Deleting an unknown ID succeeds.
    async fn delete_user(&self, user_id: &str) -> Result<()>;
}
