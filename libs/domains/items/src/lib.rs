//! Items Domain
//!
//! This module provides a complete domain implementation for managing items
//! (work tickets) with interchangeable storage backends.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  ItemStore  │  ← Storage contract (trait)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐   ┌─────────────┐
//! │  MemStore   │   │ PgItemStore │  ← Interchangeable backends
//! └─────────────┘   └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{CreateItem, ItemStore, PgItemStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Connect and pick a backend
//! let db = database::postgres::connect("postgres://...").await?;
//! let store = PgItemStore::new(db);
//! store.init().await?;
//!
//! let item = store
//!     .add(CreateItem {
//!         name: "Fix the build".to_string(),
//!         description: String::new(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use memory::MemStore;
pub use models::{CreateItem, Item, UpdateItem};
pub use postgres::PgItemStore;
pub use repository::ItemStore;
