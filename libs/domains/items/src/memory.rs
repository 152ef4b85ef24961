//! In-memory implementation of ItemStore

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemStore;

/// In-memory implementation of the ItemStore (for development/testing)
///
/// Identifiers come from a monotonically increasing counter starting at 1,
/// so iteration in key order is insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    items: BTreeMap<i32, Item>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemStore {
    async fn init(&self) -> ItemResult<()> {
        Ok(())
    }

    async fn add(&self, input: CreateItem) -> ItemResult<Item> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;

        let item = Item {
            id: inner.next_id,
            name: input.name,
            description: input.description,
            created: Utc::now(),
        };
        inner.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Item created");
        Ok(item)
    }

    async fn replace(&self, id: i32, input: UpdateItem) -> ItemResult<bool> {
        let mut inner = self.inner.write().await;

        match inner.items.get_mut(&id) {
            Some(item) => {
                item.apply_update(input);
                tracing::info!(item_id = id, "Item replaced");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        let mut inner = self.inner.write().await;
        let removed = inner.items.remove(&id).is_some();

        if removed {
            tracing::info!(item_id = id, "Item deleted");
        }
        Ok(removed)
    }

    async fn delete_all(&self) -> ItemResult<()> {
        let mut inner = self.inner.write().await;
        inner.items.clear();
        Ok(())
    }

    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let inner = self.inner.read().await;
        Ok(inner.items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let inner = self.inner.read().await;
        Ok(inner.items.get(&id).cloned())
    }

    async fn find_by_key_in_name(&self, key: &str) -> ItemResult<Vec<Item>> {
        let inner = self.inner.read().await;
        Ok(inner
            .items
            .values()
            .filter(|item| item.name.contains(key))
            .cloned()
            .collect())
    }

    async fn close(&self) -> ItemResult<()> {
        Ok(())
    }
}
