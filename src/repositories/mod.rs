use sea_orm::error::{DbErr, SqlErr};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::errors::ServiceError;

pub mod category_repository;
pub mod item_repository;
pub mod subcategory_repository;

pub use category_repository::CategoryRepository;
pub use item_repository::ItemRepository;
pub use subcategory_repository::SubCategoryRepository;

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Maps an insert failure to the service taxonomy: a unique-name violation
/// becomes a conflict the caller can surface as "already available", anything
/// else stays a database error.
pub(crate) fn map_insert_err(err: DbErr, entity: &str) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ServiceError::Conflict(format!("The {entity} is already available."))
        }
        _ => ServiceError::DatabaseError(err),
    }
}
