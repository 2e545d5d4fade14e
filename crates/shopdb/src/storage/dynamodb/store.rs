//! DynamoDB table store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use shopdb_core::storage::{Item, Result, StoreError, TableKey, TableQuery, TableStore};

use shopdb_core::storage::attributes::{attributes_to_item, item_to_attributes};

use super::conversions::{build_key_condition, build_update_expression, key_to_attributes};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_scan_error, map_update_item_error,
};
use crate::config::Config;

/// DynamoDB-backed single table.
///
/// Every trait call is one SDK request. Query and scan read a single page.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a store from configuration.
    ///
    /// Uses the AWS SDK default credential chain. A configured endpoint URL
    /// points the client at a local DynamoDB.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl TableStore for DynamoDbStore {
    async fn get_item(&self, key: &TableKey) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        result.item.as_ref().map(attributes_to_item).transpose()
    }

    async fn put_item(&self, item: Item) -> Result<()> {
        if TableKey::of_item(&item).is_none() {
            return Err(StoreError::InvalidData(
                "Item is missing its primary key".to_string(),
            ));
        }

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(&item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_item(&self, key: &TableKey, attributes: Item) -> Result<()> {
        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)));

        if let Some(update) = build_update_expression(&attributes) {
            request = request
                .update_expression(update.expression)
                .set_expression_attribute_names(Some(update.names))
                .set_expression_attribute_values(Some(update.values));
        }

        request.send().await.map_err(map_update_item_error)?;

        Ok(())
    }

    async fn delete_item(&self, key: &TableKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn query(&self, query: &TableQuery) -> Result<Vec<Item>> {
        let condition = build_key_condition(query);

        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .set_index_name(query.index_name.map(str::to_string))
            .key_condition_expression(condition.expression)
            .set_expression_attribute_names(Some(condition.names))
            .set_expression_attribute_values(Some(condition.values))
            .send()
            .await
            .map_err(map_query_error)?;

        result.items().iter().map(attributes_to_item).collect()
    }

    async fn scan(&self) -> Result<Vec<Item>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        result.items().iter().map(attributes_to_item).collect()
    }
}
