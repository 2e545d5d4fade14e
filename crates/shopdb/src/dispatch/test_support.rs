//! Test doubles for the dispatcher.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::RwLock;

use shopdb_core::storage::{Item, Result, StoreError, TableKey, TableQuery, TableStore};

/// Store operations, as recorded by [`RecordingStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Get,
    Put,
    Update,
    Delete,
    Query,
    Scan,
}

/// Minimal in-memory store that records every call made to it.
#[derive(Debug, Default)]
pub struct RecordingStore {
    items: RwLock<BTreeMap<TableKey, Item>>,
    ops: Mutex<Vec<Op>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, op: Op) {
        self.ops.lock().unwrap().push(op);
    }

    /// Total number of store calls.
    pub fn calls(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Number of calls of one kind.
    pub fn count(&self, op: Op) -> usize {
        self.ops.lock().unwrap().iter().filter(|o| **o == op).count()
    }

    /// Number of put, update and delete calls.
    pub fn writes(&self) -> usize {
        self.count(Op::Put) + self.count(Op::Update) + self.count(Op::Delete)
    }

    /// Returns the raw stored item, bypassing the recorder.
    pub async fn raw(&self, key: &TableKey) -> Option<Item> {
        self.items.read().await.get(key).cloned()
    }

    /// Stores an item without recording the call.
    pub async fn seed(&self, item: Item) {
        let key = TableKey::of_item(&item).unwrap();
        self.items.write().await.insert(key, item);
    }
}

#[async_trait]
impl TableStore for RecordingStore {
    async fn get_item(&self, key: &TableKey) -> Result<Option<Item>> {
        self.record(Op::Get);
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn put_item(&self, item: Item) -> Result<()> {
        self.record(Op::Put);
        let key = TableKey::of_item(&item)
            .ok_or_else(|| StoreError::InvalidData("item without key".to_string()))?;
        self.items.write().await.insert(key, item);
        Ok(())
    }

    async fn update_item(&self, key: &TableKey, attributes: Item) -> Result<()> {
        self.record(Op::Update);
        let mut items = self.items.write().await;
        let item = items.entry(key.clone()).or_insert_with(|| {
            let mut item = Item::new();
            item.insert("pk".to_string(), key.pk.clone().into());
            item.insert("sk".to_string(), key.sk.clone().into());
            item
        });
        item.extend(attributes);
        Ok(())
    }

    async fn delete_item(&self, key: &TableKey) -> Result<()> {
        self.record(Op::Delete);
        self.items.write().await.remove(key);
        Ok(())
    }

    async fn query(&self, query: &TableQuery) -> Result<Vec<Item>> {
        self.record(Op::Query);
        Ok(self
            .items
            .read()
            .await
            .values()
            .filter(|item| query.matches(item))
            .cloned()
            .collect())
    }

    async fn scan(&self) -> Result<Vec<Item>> {
        self.record(Op::Scan);
        Ok(self.items.read().await.values().cloned().collect())
    }
}

/// A store whose every call fails with the same error.
#[derive(Debug)]
pub struct FailingStore {
    error: StoreError,
}

impl FailingStore {
    pub fn new(error: StoreError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl TableStore for FailingStore {
    async fn get_item(&self, _key: &TableKey) -> Result<Option<Item>> {
        Err(self.error.clone())
    }

    async fn put_item(&self, _item: Item) -> Result<()> {
        Err(self.error.clone())
    }

    async fn update_item(&self, _key: &TableKey, _attributes: Item) -> Result<()> {
        Err(self.error.clone())
    }

    async fn delete_item(&self, _key: &TableKey) -> Result<()> {
        Err(self.error.clone())
    }

    async fn query(&self, _query: &TableQuery) -> Result<Vec<Item>> {
        Err(self.error.clone())
    }

    async fn scan(&self) -> Result<Vec<Item>> {
        Err(self.error.clone())
    }
}
