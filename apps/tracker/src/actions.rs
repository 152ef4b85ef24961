//! Menu actions: one selectable command per struct

use std::sync::Arc;

use async_trait::async_trait;
use domain_items::{CreateItem, ItemStore, UpdateItem};

use crate::input::Input;
use crate::output::Output;

/// One selectable menu command
///
/// `execute` performs one full user interaction (prompts, store calls,
/// result reporting) and returns whether the session continues.
#[async_trait]
pub trait UserAction: Send + Sync {
    /// Menu label
    fn name(&self) -> &str;

    /// Run the interaction; true keeps the session loop alive
    async fn execute(&self, input: &mut dyn Input, store: &dyn ItemStore) -> eyre::Result<bool>;
}

/// Create a new item from prompted name and description
///
/// The name is taken as-is; an empty name still creates an item.
pub struct CreateAction {
    out: Arc<dyn Output>,
}

impl CreateAction {
    pub fn new(out: Arc<dyn Output>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl UserAction for CreateAction {
    fn name(&self) -> &str {
        "Create a new Item"
    }

    async fn execute(&self, input: &mut dyn Input, store: &dyn ItemStore) -> eyre::Result<bool> {
        self.out.println("=== Create a new Item ===");
        let name = input.ask_str("Enter name: ")?;
        let description = input.ask_str("Enter description: ")?;

        let item = store.add(CreateItem { name, description }).await?;
        self.out.println(&format!("Created: {item}"));
        Ok(true)
    }
}

/// List every stored item
pub struct ShowAllAction {
    out: Arc<dyn Output>,
}

impl ShowAllAction {
    pub fn new(out: Arc<dyn Output>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl UserAction for ShowAllAction {
    fn name(&self) -> &str {
        "Show all Items"
    }

    async fn execute(&self, _input: &mut dyn Input, store: &dyn ItemStore) -> eyre::Result<bool> {
        self.out.println("=== Show all Items ===");

        let items = store.find_all().await?;
        if items.is_empty() {
            self.out.println("No items found.");
        } else {
            for item in items {
                self.out.println(&item.to_string());
            }
        }
        Ok(true)
    }
}

/// Replace name/description of an existing item
pub struct ReplaceAction {
    out: Arc<dyn Output>,
}

impl ReplaceAction {
    pub fn new(out: Arc<dyn Output>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl UserAction for ReplaceAction {
    fn name(&self) -> &str {
        "Replace a current Item"
    }

    async fn execute(&self, input: &mut dyn Input, store: &dyn ItemStore) -> eyre::Result<bool> {
        self.out.println("=== Replace a current Item ===");
        let id = input.ask_int("Enter id: ")?;
        let name = input.ask_str("Enter new name: ")?;

        // An empty replacement name is rejected before touching the store
        if name.is_empty() {
            self.out.println("Error!");
            return Ok(true);
        }

        let description = input.ask_str("Enter new description: ")?;
        if store.replace(id, UpdateItem { name, description }).await? {
            self.out.println("Replace success!");
        } else {
            self.out.println("Item with this id not found!");
        }
        Ok(true)
    }
}

/// Delete an item by id
pub struct DeleteAction {
    out: Arc<dyn Output>,
}

impl DeleteAction {
    pub fn new(out: Arc<dyn Output>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl UserAction for DeleteAction {
    fn name(&self) -> &str {
        "Delete an Item"
    }

    async fn execute(&self, input: &mut dyn Input, store: &dyn ItemStore) -> eyre::Result<bool> {
        self.out.println("=== Delete an Item ===");
        let id = input.ask_int("Enter id: ")?;

        if store.delete(id).await? {
            self.out.println("Item deleted successfully!");
        } else {
            self.out.println("Item with this id not found!");
        }
        Ok(true)
    }
}

/// Look up a single item by id
pub struct FindByIdAction {
    out: Arc<dyn Output>,
}

impl FindByIdAction {
    pub fn new(out: Arc<dyn Output>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl UserAction for FindByIdAction {
    fn name(&self) -> &str {
        "Find Item by id"
    }

    async fn execute(&self, input: &mut dyn Input, store: &dyn ItemStore) -> eyre::Result<bool> {
        self.out.println("=== Find Item by id ===");
        let id = input.ask_int("Enter id: ")?;

        match store.find_by_id(id).await? {
            Some(item) => self.out.println(&item.to_string()),
            None => self.out.println("Item with this id not found!"),
        }
        Ok(true)
    }
}

/// List items whose name contains the prompted key
pub struct FindByNameAction {
    out: Arc<dyn Output>,
}

impl FindByNameAction {
    pub fn new(out: Arc<dyn Output>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl UserAction for FindByNameAction {
    fn name(&self) -> &str {
        "Find Items by name"
    }

    async fn execute(&self, input: &mut dyn Input, store: &dyn ItemStore) -> eyre::Result<bool> {
        self.out.println("=== Find Items by name ===");
        let key = input.ask_str("Enter name key: ")?;

        let items = store.find_by_key_in_name(&key).await?;
        if items.is_empty() {
            self.out.println("Nothing found.");
        } else {
            for item in items {
                self.out.println(&item.to_string());
            }
        }
        Ok(true)
    }
}

/// Terminate the session
pub struct ExitAction {
    out: Arc<dyn Output>,
}

impl ExitAction {
    pub fn new(out: Arc<dyn Output>) -> Self {
        Self { out }
    }
}

#[async_trait]
impl UserAction for ExitAction {
    fn name(&self) -> &str {
        "Exit"
    }

    async fn execute(&self, _input: &mut dyn Input, _store: &dyn ItemStore) -> eyre::Result<bool> {
        self.out.println("Goodbye!");
        Ok(false)
    }
}
