pub mod categories;
pub mod common;
pub mod items;
pub mod subcategories;

use std::sync::Arc;

use crate::db::DbPool;
use crate::repositories::{CategoryRepository, ItemRepository, SubCategoryRepository};
use crate::services::{CategoryService, ItemService, SubCategoryService};

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub subcategories: Arc<SubCategoryService>,
    pub items: Arc<ItemService>,
}

impl AppServices {
    /// Wire repositories and services on top of a shared connection pool.
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        let category_repo = Arc::new(CategoryRepository::new(db_pool.clone()));
        let subcategory_repo = Arc::new(SubCategoryRepository::new(db_pool.clone()));
        let item_repo = Arc::new(ItemRepository::new(db_pool));

        let categories = Arc::new(CategoryService::new(category_repo.clone()));
        let subcategories = Arc::new(SubCategoryService::new(
            subcategory_repo.clone(),
            category_repo.clone(),
        ));
        let items = Arc::new(ItemService::new(
            item_repo,
            category_repo,
            subcategory_repo,
        ));

        Self {
            categories,
            subcategories,
            items,
        }
    }
}
