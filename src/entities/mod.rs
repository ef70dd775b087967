/// Catalog entities module
pub mod category;
pub mod item;
pub mod subcategory;

// Re-export entities
pub use category::{Entity as Category, Model as CategoryModel};
pub use item::{Entity as Item, Model as ItemModel};
pub use subcategory::{Entity as SubCategory, Model as SubCategoryModel};
