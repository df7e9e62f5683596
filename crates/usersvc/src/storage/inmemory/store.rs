//! In-memory `KeyValueStore` implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use usersvc_core::storage::{AttributeValue, Item, KeyValueStore, RepositoryError, Result};

/// Canonical form of an item key, usable as a map key.
type KeyTuple = Vec<(String, AttributeValue)>;

type Table = HashMap<KeyTuple, Item>;

/// In-memory key-value backend.
///
/// Every table shares one key schema: the single partition key attribute
/// given at construction. Tables are created on first write. Data is not
/// persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    key_attribute: String,
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl InMemoryStore {
    /// Creates an empty store keyed on `key_attribute`.
    pub fn new(key_attribute: impl Into<String>) -> Self {
        Self {
            key_attribute: key_attribute.into(),
            tables: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of items currently stored in `table`.
    #[cfg(test)]
    pub async fn len(&self, table: &str) -> usize {
        self.tables
            .read()
            .await
            .get(table)
            .map_or(0, HashMap::len)
    }

    /// Extracts the key of `item`, rejecting items without the key attribute.
    fn key_of(&self, item: &Item) -> Result<KeyTuple> {
        let value = item.get(&self.key_attribute).ok_or_else(|| {
            RepositoryError::InvalidData(format!(
                "Missing key attribute: {}",
                self.key_attribute
            ))
        })?;

        Ok(vec![(self.key_attribute.clone(), value.clone())])
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn put_item(&self, table: &str, item: Item) -> Result<()> {
        let key = self.key_of(&item)?;
        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default().insert(key, item);
        Ok(())
    }

    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>> {
        let key = self.key_of(&key)?;
        let tables = self.tables.read().await;
        Ok(tables.get(table).and_then(|t| t.get(&key)).cloned())
    }

    async fn update_item(&self, table: &str, key: Item, updates: Item) -> Result<()> {
        let key_tuple = self.key_of(&key)?;
        if updates.contains_key(&self.key_attribute) {
            return Err(RepositoryError::InvalidData(format!(
                "Cannot update key attribute: {}",
                self.key_attribute
            )));
        }

        let mut tables = self.tables.write().await;
        tables
            .entry(table.to_string())
            .or_default()
            .entry(key_tuple)
            .or_insert(key)
            .extend(updates);
        Ok(())
    }

    async fn delete_item(&self, table: &str, key: Item) -> Result<()> {
        let key = self.key_of(&key)?;
        let mut tables = self.tables.write().await;
        if let Some(t) = tables.get_mut(table) {
            t.remove(&key);
        }
        Ok(())
    }
}
