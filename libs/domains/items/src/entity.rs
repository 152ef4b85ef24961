use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the items table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Item
impl From<Model> for crate::models::Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created: model.created.into(),
        }
    }
}

// Conversion from domain CreateItem to Sea-ORM ActiveModel; the database
// assigns the identifier
impl From<crate::models::CreateItem> for ActiveModel {
    fn from(input: crate::models::CreateItem) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            created: Set(chrono::Utc::now().into()),
        }
    }
}
