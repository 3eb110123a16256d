use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// A location referenced by name on update does not exist.
    #[error("location not found: {0}")]
    LocationNotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Map a storage error for `entity`, turning unique-key violations into `Conflict`.
    pub fn from_db(entity: &str, e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(format!("{} already exists", entity)),
            _ => Self::Db(e.to_string()),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { Self::from_db("record", e) }
}
