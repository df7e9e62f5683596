//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is reached only through the `UserRepository`
//! trait object, so handlers never know which backend is behind it.

use std::sync::Arc;

use usersvc_core::storage::{UserRepository, UserStore, ATTR_USER_ID};

use crate::config::Config;
use crate::storage::InMemoryStore;

/// Shared application state.
///
/// Cloned for each request handler. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    /// User repository.
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Creates state around an existing repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Creates state backed by a fresh in-memory store.
    pub fn in_memory(table_name: impl Into<String>) -> Self {
        let backend = Arc::new(InMemoryStore::new(ATTR_USER_ID));
        Self::new(Arc::new(UserStore::new(backend, table_name)))
    }

    /// Creates state for the storage backend selected at compile time.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> Self {
        use crate::storage::DynamoDbStore;

        tracing::info!(
            table = %config.table_name,
            region = %config.aws_region,
            endpoint = ?config.aws_endpoint_url,
            "Using DynamoDB storage"
        );

        let backend = Arc::new(DynamoDbStore::from_config(config).await);
        Self::new(Arc::new(UserStore::new(backend, config.table_name.clone())))
    }

    /// Creates state for the storage backend selected at compile time.
    #[cfg(not(feature = "dynamodb"))]
    pub async fn from_config(config: &Config) -> Self {
        tracing::warn!(
            table = %config.table_name,
            "Using in-memory storage, data will not survive a restart"
        );

        Self::in_memory(config.table_name.clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(usersvc_core::storage::DEFAULT_TABLE_NAME)
    }
}
