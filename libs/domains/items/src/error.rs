use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<sea_orm::DbErr> for ItemError {
    fn from(err: sea_orm::DbErr) -> Self {
        ItemError::Database(err.to_string())
    }
}
