use rust_decimal::Decimal;
use sea_orm::Set;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::entities::item::{self, compute_total};
use crate::entities::ItemModel;
use crate::errors::ServiceError;
use crate::repositories::{CategoryRepository, ItemRepository, SubCategoryRepository};
use crate::services::listing::{self, ListFilter, Listing};

/// Which level of the hierarchy an item hangs off.
#[derive(Debug, Clone, Copy)]
pub enum ItemOwner {
    Category(Uuid),
    SubCategory(Uuid),
}

/// Item service: creation under an owner, derived-total maintenance,
/// listing, and substring search.
#[derive(Clone)]
pub struct ItemService {
    repo: Arc<ItemRepository>,
    categories: Arc<CategoryRepository>,
    subcategories: Arc<SubCategoryRepository>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_create_amounts"))]
pub struct CreateItemInput {
    #[validate(custom = "crate::services::validate_not_blank")]
    pub name: String,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub image: String,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub description: String,
    pub tax_applicable: bool,
    pub tax: Option<Decimal>,
    pub base_amount: Decimal,
    pub discount: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateItemInput {
    #[validate(custom = "crate::services::validate_not_blank")]
    pub name: Option<String>,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub image: Option<String>,
    #[validate(custom = "crate::services::validate_not_blank")]
    pub description: Option<String>,
    pub tax_applicable: Option<bool>,
    pub tax: Option<Decimal>,
    pub base_amount: Option<Decimal>,
    pub discount: Option<Decimal>,
}

fn validate_create_amounts(input: &CreateItemInput) -> Result<(), ValidationError> {
    check_amounts(input.base_amount, input.discount)
}

/// `0 <= discount <= base_amount`; discounting more than the base would
/// produce a negative total.
fn check_amounts(base_amount: Decimal, discount: Decimal) -> Result<(), ValidationError> {
    if base_amount.is_sign_negative() {
        return Err(ValidationError::new("base_amount must be non-negative"));
    }
    if discount.is_sign_negative() || discount > base_amount {
        return Err(ValidationError::new(
            "discount must be between 0 and base_amount",
        ));
    }
    Ok(())
}

impl ItemService {
    pub fn new(
        repo: Arc<ItemRepository>,
        categories: Arc<CategoryRepository>,
        subcategories: Arc<SubCategoryRepository>,
    ) -> Self {
        Self {
            repo,
            categories,
            subcategories,
        }
    }

    /// Create an item under a category or a subcategory. The owner must
    /// exist; exactly one owner column is set. `total_amount` is derived
    /// here, never taken from the caller.
    #[instrument(skip(self))]
    pub async fn create_item(
        &self,
        owner: ItemOwner,
        input: CreateItemInput,
    ) -> Result<ItemModel, ServiceError> {
        input.validate()?;

        let (category_id, subcategory_id) = match owner {
            ItemOwner::Category(id) => {
                self.categories
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ServiceError::NotFound("Category not found".to_string()))?;
                (Some(id), None)
            }
            ItemOwner::SubCategory(id) => {
                self.subcategories
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ServiceError::NotFound("Subcategory not found".to_string()))?;
                (None, Some(id))
            }
        };

        let item = item::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.trim().to_string()),
            image: Set(input.image.trim().to_string()),
            description: Set(input.description.trim().to_string()),
            tax_applicable: Set(input.tax_applicable),
            tax: Set(input.tax),
            base_amount: Set(input.base_amount),
            discount: Set(input.discount),
            total_amount: Set(compute_total(input.base_amount, input.discount)),
            category_id: Set(category_id),
            subcategory_id: Set(subcategory_id),
        };

        let item = self.repo.create(item).await?;
        info!("Created item: {}", item.id);
        Ok(item)
    }

    /// Merge-patch update. When the patch touches `base_amount` or
    /// `discount`, the total is recomputed from the merged view of existing
    /// and incoming values, so it always reflects the patched amounts. A
    /// missing id is a successful no-op.
    #[instrument(skip(self))]
    pub async fn update_item(&self, id: Uuid, input: UpdateItemInput) -> Result<(), ServiceError> {
        input.validate()?;

        let mut patch = item::ActiveModel::default();
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

        if input.base_amount.is_some() || input.discount.is_some() {
            let Some(current) = self.repo.find_by_id(id).await? else {
                // No-op update contract: the id does not exist, nothing to
                // recompute or write.
                return Ok(());
            };
            let base_amount = input.base_amount.unwrap_or(current.base_amount);
            let discount = input.discount.unwrap_or(current.discount);
            check_amounts(base_amount, discount)
                .map_err(|e| ServiceError::ValidationError(e.code.to_string()))?;

            patch.base_amount = Set(base_amount);
            patch.discount = Set(discount);
            patch.total_amount = Set(compute_total(base_amount, discount));
            changed = true;
        }

        if !changed {
            return Ok(());
        }

        self.repo.update(id, patch).await?;
        info!("Updated item: {}", id);
        Ok(())
    }

    /// List items through the shared four-way filter.
    #[instrument(skip(self))]
    pub async fn list_items(&self, filter: ListFilter) -> Result<Listing<ItemModel>, ServiceError> {
        let items = self.repo.find_all().await?;
        Ok(listing::apply_filter(items, &filter))
    }

    /// Case-insensitive substring search on item names. An absent or empty
    /// query returns nothing, deliberately unlike the unfiltered list.
    #[instrument(skip(self))]
    pub async fn search_items(&self, query: Option<&str>) -> Result<Vec<ItemModel>, ServiceError> {
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return Ok(Vec::new());
        };
        let needle = query.to_lowercase();

        let items = self.repo.find_all().await?;
        Ok(items
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Full records for the items under an owner. Owner existence is not
    /// checked; an unknown owner yields an empty list, never an error.
    #[instrument(skip(self))]
    pub async fn list_by_owner(&self, owner: ItemOwner) -> Result<Vec<ItemModel>, ServiceError> {
        match owner {
            ItemOwner::Category(id) => self.repo.find_by_category(id).await,
            ItemOwner::SubCategory(id) => self.repo.find_by_subcategory(id).await,
        }
    }
}
