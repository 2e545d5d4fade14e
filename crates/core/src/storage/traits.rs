use async_trait::async_trait;

use super::{Item, Result, TableKey, TableQuery};

/// Item-level access to the single table.
///
/// Every call is an independent, unconditional operation. Implementations do
/// not retry and do not lock across calls.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Gets an item by its primary key.
    async fn get_item(&self, key: &TableKey) -> Result<Option<Item>>;

    /// Writes an item, replacing any item with the same primary key.
    async fn put_item(&self, item: Item) -> Result<()>;

    /// Sets the given attributes on the item at `key`, creating it if absent.
    async fn update_item(&self, key: &TableKey, attributes: Item) -> Result<()>;

    /// Deletes the item at `key`. Deleting an absent item is not an error.
    async fn delete_item(&self, key: &TableKey) -> Result<()>;

    /// Returns all items satisfying the key conditions of `query`.
    async fn query(&self, query: &TableQuery) -> Result<Vec<Item>>;

    /// Returns every item in the table.
    async fn scan(&self) -> Result<Vec<Item>>;
}
