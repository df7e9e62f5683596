//! User store over a generic key-value backend.

use std::sync::Arc;

use async_trait::async_trait;

use crate::user::User;

use super::{
    item_to_user, user_key, user_to_item, user_updates, KeyValueStore, RepositoryError, Result,
    UserRepository,
};

/// Table used when none is configured.
pub const DEFAULT_TABLE_NAME: &str = "Users";

/// [`UserRepository`] backed by any [`KeyValueStore`].
///
/// Each operation is exactly one backend call. There are no existence checks,
/// no conditions and no retries.
#[derive(Clone)]
pub struct UserStore {
    backend: Arc<dyn KeyValueStore>,
    table_name: String,
}

impl UserStore {
    /// Creates a store over `backend`, keeping users in `table_name`.
    pub fn new(backend: Arc<dyn KeyValueStore>, table_name: impl Into<String>) -> Self {
        Self {
            backend,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create_user(&self, user: &User) -> Result<()> {
        self.backend
            .put_item(&self.table_name, user_to_item(user))
            .await
    }

    async fn get_user(&self, user_id: &str) -> Result<User> {
        let item = self
            .backend
            .get_item(&self.table_name, user_key(user_id))
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "User",
                id: user_id.to_string(),
            })?;

        item_to_user(&item)
    }

    async fn update_user(&self, user_id: &str, user: &User) -> Result<()> {
        self.backend
            .update_item(&self.table_name, user_key(user_id), user_updates(user))
            .await
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.backend
            .delete_item(&self.table_name, user_key(user_id))
            .await
    }
}
