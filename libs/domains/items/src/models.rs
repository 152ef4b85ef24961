use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Item entity - represents a work ticket
///
/// The identifier is assigned by the store at creation and is immutable
/// thereafter; `created` is set once and never touched by replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: i32,
    /// Item name
    pub name: String,
    /// Item description
    pub description: String,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// DTO for replacing an existing item's content
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Item {
    /// Apply replacement content from UpdateItem; `created` is preserved
    pub fn apply_update(&mut self, update: UpdateItem) {
        self.name = update.name;
        self.description = update.description;
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item{{id={}, name={}, description={}, created={}}}",
            self.id,
            self.name,
            self.description,
            self.created.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
