use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::item::{ActiveModel as ItemActiveModel, Column, Entity as Item};
use crate::entities::ItemModel;
use crate::errors::ServiceError;
use crate::repositories::{map_insert_err, BaseRepository, Repository};

/// Repository for item persistence
#[derive(Debug)]
pub struct ItemRepository {
    base: BaseRepository,
}

impl ItemRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, record: ItemActiveModel) -> Result<ItemModel, ServiceError> {
        record
            .insert(self.base.get_db())
            .await
            .map_err(|e| map_insert_err(e, "item"))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ItemModel>, ServiceError> {
        Item::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    pub async fn find_all(&self) -> Result<Vec<ItemModel>, ServiceError> {
        Item::find()
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Items created directly under a category.
    pub async fn find_by_category(&self, category_id: Uuid) -> Result<Vec<ItemModel>, ServiceError> {
        Item::find()
            .filter(Column::CategoryId.eq(category_id))
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Items created under a subcategory.
    pub async fn find_by_subcategory(
        &self,
        subcategory_id: Uuid,
    ) -> Result<Vec<ItemModel>, ServiceError> {
        Item::find()
            .filter(Column::SubcategoryId.eq(subcategory_id))
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    /// Merge-patch; zero rows affected is a successful no-op.
    pub async fn update(&self, id: Uuid, patch: ItemActiveModel) -> Result<(), ServiceError> {
        Item::update_many()
            .set(patch)
            .filter(Column::Id.eq(id))
            .exec(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)?;
        Ok(())
    }
}
