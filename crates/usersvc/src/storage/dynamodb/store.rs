//! DynamoDB `KeyValueStore` implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use usersvc_core::storage::{Item, KeyValueStore, Result};

use super::conversions::{build_update_expression, from_dynamo_item, to_dynamo_item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_update_item_error,
};
use crate::config::Config;

/// DynamoDB-based key-value backend.
///
/// Wraps one SDK client, created once per process and shared by every
/// request. Every call is a single unconditional item operation.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    /// Creates a store over an existing DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a store from configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region.
    /// When an endpoint URL is set (DynamoDB Local), requests go there instead.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl KeyValueStore for DynamoDbStore {
    async fn put_item(&self, table: &str, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(to_dynamo_item(&item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(to_dynamo_item(&key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(from_dynamo_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn update_item(&self, table: &str, key: Item, updates: Item) -> Result<()> {
        let update = build_update_expression(&updates);

        self.client
            .update_item()
            .table_name(table)
            .set_key(Some(to_dynamo_item(&key)))
            .update_expression(update.expression)
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values(Some(update.values))
            .send()
            .await
            .map_err(map_update_item_error)?;

        Ok(())
    }

    async fn delete_item(&self, table: &str, key: Item) -> Result<()> {
        self.client
            .delete_item()
            .table_name(table)
            .set_key(Some(to_dynamo_item(&key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
