use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::subcategory::{
    ActiveModel as SubCategoryActiveModel, Column, Entity as SubCategory,
};
use crate::entities::SubCategoryModel;
use crate::errors::ServiceError;
use crate::repositories::{map_insert_err, BaseRepository, Repository};

/// Repository for subcategory persistence
#[derive(Debug)]
pub struct SubCategoryRepository {
    base: BaseRepository,
}

impl SubCategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(
        &self,
        record: SubCategoryActiveModel,
    ) -> Result<SubCategoryModel, ServiceError> {
        record
            .insert(self.base.get_db())
            .await
            .map_err(|e| map_insert_err(e, "subcategory"))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<SubCategoryModel>, ServiceError> {
        SubCategory::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    pub async fn find_all(&self) -> Result<Vec<SubCategoryModel>, ServiceError> {
        SubCategory::find()
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Subcategories owned by a category. An unknown parent simply matches
    /// nothing.
    pub async fn find_by_parent(
        &self,
        parent_id: Uuid,
    ) -> Result<Vec<SubCategoryModel>, ServiceError> {
        SubCategory::find()
            .filter(Column::ParentId.eq(parent_id))
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Merge-patch; zero rows affected is a successful no-op.
    pub async fn update(
        &self,
        id: Uuid,
        patch: SubCategoryActiveModel,
    ) -> Result<(), ServiceError> {
        SubCategory::update_many()
            .set(patch)
            .filter(Column::Id.eq(id))
            .exec(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)?;
        Ok(())
    }
}
