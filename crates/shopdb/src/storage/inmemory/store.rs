//! In-memory table store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use shopdb_core::schema::{PK_ATTR, SK_ATTR};
use shopdb_core::storage::{Item, Result, StoreError, TableKey, TableQuery, TableStore};

/// In-memory single table.
///
/// Items are ordered by `(pk, sk)`, so a base-table query returns items in
/// sort-key order like DynamoDB does. Data is lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<RwLock<BTreeMap<TableKey, Item>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TableStore for InMemoryStore {
    async fn get_item(&self, key: &TableKey) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn put_item(&self, item: Item) -> Result<()> {
        let key = TableKey::of_item(&item).ok_or_else(|| {
            StoreError::InvalidData(format!("Item is missing its {PK_ATTR}/{SK_ATTR} key"))
        })?;

        let mut items = self.items.write().await;
        items.insert(key, item);
        Ok(())
    }

    async fn update_item(&self, key: &TableKey, attributes: Item) -> Result<()> {
        let mut items = self.items.write().await;
        let item = items.entry(key.clone()).or_insert_with(|| {
            let mut item = Item::new();
            item.insert(PK_ATTR.to_string(), Value::from(key.pk.clone()));
            item.insert(SK_ATTR.to_string(), Value::from(key.sk.clone()));
            item
        });

        // Key attributes cannot be changed by an update.
        item.extend(
            attributes
                .into_iter()
                .filter(|(name, _)| name != PK_ATTR && name != SK_ATTR),
        );
        Ok(())
    }

    async fn delete_item(&self, key: &TableKey) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }

    async fn query(&self, query: &TableQuery) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| query.matches(item))
            .cloned()
            .collect())
    }

    async fn scan(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}
