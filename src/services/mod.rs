// Catalog services
pub mod categories;
pub mod items;
pub mod listing;
pub mod subcategories;

pub use categories::CategoryService;
pub use items::{ItemOwner, ItemService};
pub use listing::{CatalogRecord, ListFilter, Listing};
pub use subcategories::SubCategoryService;

use validator::ValidationError;

/// Rejects strings that are empty once trimmed. Stored values are trimmed
/// by the services, so a whitespace-only field is as bad as a missing one.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("must not be blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_not_blank;

    #[test]
    fn blank_strings_are_rejected() {
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank(" Pizza ").is_ok());
    }
}
