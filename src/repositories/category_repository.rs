use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::category::{ActiveModel as CategoryActiveModel, Column, Entity as Category};
use crate::entities::CategoryModel;
use crate::errors::ServiceError;
use crate::repositories::{map_insert_err, BaseRepository, Repository};

/// Repository for category persistence
#[derive(Debug)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert a new category; a unique-name violation surfaces as a conflict.
    pub async fn create(&self, record: CategoryActiveModel) -> Result<CategoryModel, ServiceError> {
        record
            .insert(self.base.get_db())
            .await
            .map_err(|e| map_insert_err(e, "category"))
    }

    /// Find a category by ID. Absence is `None`, not an error.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CategoryModel>, ServiceError> {
        Category::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Fetch every category. Filtering happens in the service layer;
    /// catalog collections are small.
    pub async fn find_all(&self) -> Result<Vec<CategoryModel>, ServiceError> {
        Category::find()
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Merge-patch: only the columns set in `patch` are written. Updating a
    /// missing id affects zero rows and is still a success.
    pub async fn update(&self, id: Uuid, patch: CategoryActiveModel) -> Result<(), ServiceError> {
        Category::update_many()
            .set(patch)
            .filter(Column::Id.eq(id))
            .exec(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)?;
        Ok(())
    }
}
