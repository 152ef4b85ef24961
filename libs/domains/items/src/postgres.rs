//! PostgreSQL implementation of ItemStore

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::instrument;

use crate::entity;
use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemStore;

/// PostgreSQL implementation of the ItemStore
///
/// Each operation executes a single statement against the connection pool,
/// so every call is its own transactional scope.
pub struct PgItemStore {
    db: DatabaseConnection,
}

impl PgItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    #[instrument(skip(self))]
    async fn init(&self) -> ItemResult<()> {
        database::postgres::check_health(&self.db)
            .await
            .map_err(|e| ItemError::Unavailable(e.to_string()))
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn add(&self, input: CreateItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(item_id = model.id, "Item created");
        Ok(model.into())
    }

    #[instrument(skip(self, input))]
    async fn replace(&self, id: i32, input: UpdateItem) -> ItemResult<bool> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Name, Expr::value(input.name))
            .col_expr(entity::Column::Description, Expr::value(input.description))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(item_id = id, "Item replaced");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> ItemResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(item_id = id, "Item deleted");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> ItemResult<()> {
        let result = entity::Entity::delete_many().exec(&self.db).await?;
        tracing::info!(rows = result.rows_affected, "All items deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(|m| m.into()))
    }

    #[instrument(skip(self))]
    async fn find_by_key_in_name(&self, key: &str) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Name.contains(key))
            .order_by_asc(entity::Column::Created)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    #[instrument(skip(self))]
    async fn close(&self) -> ItemResult<()> {
        self.db.clone().close().await?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}
