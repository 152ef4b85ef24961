use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};

/// Storage contract for Items
///
/// This trait defines the data access interface plus the backend lifecycle.
/// Implementations can use different storage backends (in-memory, PostgreSQL)
/// and must expose identical external behavior for every operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Prepare the backend; must be called once before any other operation.
    /// Fails with [`ItemError::Unavailable`] if the backend is unreachable.
    ///
    /// [`ItemError::Unavailable`]: crate::error::ItemError::Unavailable
    async fn init(&self) -> ItemResult<()>;

    /// Add a new item; the store assigns the identifier
    async fn add(&self, input: CreateItem) -> ItemResult<Item>;

    /// Replace name/description of the item matching `id`
    ///
    /// Returns true iff exactly one record matched. An unknown id yields
    /// false, not an error. The creation timestamp is preserved.
    async fn replace(&self, id: i32, input: UpdateItem) -> ItemResult<bool>;

    /// Delete the item matching `id`; true iff a record was removed
    async fn delete(&self, id: i32) -> ItemResult<bool>;

    /// Delete every item
    async fn delete_all(&self) -> ItemResult<()>;

    /// All items, in creation order
    async fn find_all(&self) -> ItemResult<Vec<Item>>;

    /// The item matching `id`, or None; never an error for a missing id
    async fn find_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// Items whose name contains `key` (case-sensitive), in creation order
    async fn find_by_key_in_name(&self, key: &str) -> ItemResult<Vec<Item>>;

    /// Release backend resources; called exactly once at shutdown
    async fn close(&self) -> ItemResult<()>;
}
