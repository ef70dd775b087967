use rust_decimal::Decimal;
use sea_orm::Set;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::entities::{subcategory, SubCategoryModel};
use crate::errors::ServiceError;
use crate::repositories::{CategoryRepository, SubCategoryRepository};
use crate::services::listing::{self, ListFilter, Listing};

/// Subcategory service. Owns the parent-existence check and the snapshot
/// inheritance of tax settings at creation time.
#[derive(Clone)]
pub struct SubCategoryService {
    repo: Arc<SubCategoryRepository>,
    categories: Arc<CategoryRepository>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubCategoryInput {
    #[validate(custom = "crate::services::validate_not_blank")]
    pub name: String,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub image: String,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub description: String,
    /// Inherited from the parent category when omitted (or `false`).
    pub tax_applicable: Option<bool>,
    /// Inherited from the parent category when omitted (or zero).
    pub tax: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSubCategoryInput {
    #[validate(custom = "crate::services::validate_not_blank")]
    pub name: Option<String>,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub image: Option<String>,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub description: Option<String>,
    pub tax_applicable: Option<bool>,
    pub tax: Option<Decimal>,
}

impl SubCategoryService {
    pub fn new(repo: Arc<SubCategoryRepository>, categories: Arc<CategoryRepository>) -> Self {
        Self { repo, categories }
    }

    /// Create a subcategory under `parent_id`. The parent must exist at this
    /// moment; its current tax settings fill in whatever the input left out.
    /// Later changes to the parent never touch the subcategory again.
    #[instrument(skip(self))]
    pub async fn create_subcategory(
        &self,
        parent_id: Uuid,
        input: CreateSubCategoryInput,
    ) -> Result<SubCategoryModel, ServiceError> {
        input.validate()?;

        let parent = self
            .categories
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Parent category not found".to_string()))?;

        // Falsy values inherit too: an explicit `false` / zero counts as
        // "use the parent's setting".
        let tax_applicable = input
            .tax_applicable
            .filter(|&applicable| applicable)
            .unwrap_or(parent.tax_applicable);
        let tax = input.tax.filter(|rate| !rate.is_zero()).or(parent.tax);

        let subcategory = subcategory::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.trim().to_string()),
            image: Set(input.image.trim().to_string()),
            description: Set(input.description.trim().to_string()),
            tax_applicable: Set(tax_applicable),
            tax: Set(tax),
            parent_id: Set(parent_id),
        };

        let subcategory = self.repo.create(subcategory).await?;
        info!("Created subcategory: {}", subcategory.id);
        Ok(subcategory)
    }

    /// Merge-patch update. The parent reference is immutable and not
    /// patchable; a missing id is a successful no-op.
    #[instrument(skip(self))]
    pub async fn update_subcategory(
        &self,
        id: Uuid,
        input: UpdateSubCategoryInput,
    ) -> Result<(), ServiceError> {
        input.validate()?;

        let mut patch = subcategory::ActiveModel::default();
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
        info!("Updated subcategory: {}", id);
        Ok(())
    }

    /// List subcategories through the shared four-way filter.
    #[instrument(skip(self))]
    pub async fn list_subcategories(
        &self,
        filter: ListFilter,
    ) -> Result<Listing<SubCategoryModel>, ServiceError> {
        let subcategories = self.repo.find_all().await?;
        Ok(listing::apply_filter(subcategories, &filter))
    }

    /// Names of the subcategories under a parent. Parent existence is not
    /// checked; an unknown parent yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_by_parent(&self, parent_id: Uuid) -> Result<Vec<String>, ServiceError> {
        let subcategories = self.repo.find_by_parent(parent_id).await?;
        Ok(subcategories.into_iter().map(|s| s.name).collect())
    }
}
