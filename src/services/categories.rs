use rust_decimal::Decimal;
use sea_orm::Set;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::entities::{category, CategoryModel};
use crate::errors::ServiceError;
use crate::repositories::CategoryRepository;
use crate::services::listing::{self, ListFilter, Listing};

/// Category service: create, merge-patch update and the shared list flow.
#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<CategoryRepository>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryInput {
    #[validate(custom = "crate::services::validate_not_blank")]
    pub name: String,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub image: String,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub description: String,
    pub tax_applicable: bool,
    pub tax: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCategoryInput {
    #[validate(custom = "crate::services::validate_not_blank")]
    pub name: Option<String>,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub image: Option<String>,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub description: Option<String>,
    pub tax_applicable: Option<bool>,
    pub tax: Option<Decimal>,
}

impl CategoryService {
    pub fn new(repo: Arc<CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Create a new category. A duplicate name surfaces as a conflict.
    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        input: CreateCategoryInput,
    ) -> Result<CategoryModel, ServiceError> {
        input.validate()?;

        let category = category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.trim().to_string()),
            image: Set(input.image.trim().to_string()),
            description: Set(input.description.trim().to_string()),
            tax_applicable: Set(input.tax_applicable),
            tax: Set(input.tax),
        };

        let category = self.repo.create(category).await?;
        info!("Created category: {}", category.id);
        Ok(category)
    }

    /// Merge-patch update. Only fields present in the input are written;
    /// patching a missing id is a successful no-op.
    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: Uuid,
        input: UpdateCategoryInput,
    ) -> Result<(), ServiceError> {
        input.validate()?;

        let mut patch = category::ActiveModel::default();
        let mut changed = false;
        if let Some(name) = input.name {
            patch.name = Set(name.trim().to_string());
            changed = true;
        }
        if let Some(image) = input.image {
            patch.image = Set(image.trim().to_string());
            changed = true;
        }
        if let Some(description) = input.description {
            patch.description = Set(description.trim().to_string());
            changed = true;
        }
        if let Some(tax_applicable) = input.tax_applicable {
            patch.tax_applicable = Set(tax_applicable);
            changed = true;
        }
        if let Some(tax) = input.tax {
            patch.tax = Set(Some(tax));
            changed = true;
        }
        if !changed {
            return Ok(());
        }

        self.repo.update(id, patch).await?;
        info!("Updated category: {}", id);
        Ok(())
    }

    /// List categories through the shared four-way filter.
    #[instrument(skip(self))]
    pub async fn list_categories(
        &self,
        filter: ListFilter,
    ) -> Result<Listing<CategoryModel>, ServiceError> {
        let categories = self.repo.find_all().await?;
        Ok(listing::apply_filter(categories, &filter))
    }
}
