use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{CategoryModel, ItemModel, SubCategoryModel};

/// A record that can appear in the shared list/filter flow. Implemented by
/// all three catalog entities so the four-way filter is written once.
pub trait CatalogRecord {
    fn record_id(&self) -> Uuid;
    fn record_name(&self) -> &str;
}

impl CatalogRecord for CategoryModel {
    fn record_id(&self) -> Uuid {
        self.id
    }
    fn record_name(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for SubCategoryModel {
    fn record_id(&self) -> Uuid {
        self.id
    }
    fn record_name(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for ItemModel {
    fn record_id(&self) -> Uuid {
        self.id
    }
    fn record_name(&self) -> &str {
        &self.name
    }
}

/// Optional list filters; both may be supplied at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    pub name: Option<String>,
    pub id: Option<Uuid>,
}

/// Result of a list operation: full records when any filter matched against
/// them, or the summary view (names only) for an unfiltered listing.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Listing<M> {
    Names(Vec<String>),
    Records(Vec<M>),
}

/// The four-way filter shared by categories, subcategories and items:
/// name and id must both match when both are given, either one filters
/// exactly on its own, and no filter at all yields only the names.
pub fn apply_filter<M: CatalogRecord>(records: Vec<M>, filter: &ListFilter) -> Listing<M> {
    // An empty name parameter counts as absent.
    let name = filter.name.as_deref().filter(|n| !n.is_empty());

    match (name, filter.id) {
        (Some(name), Some(id)) => Listing::Records(
            records
                .into_iter()
                .filter(|r| r.record_name() == name && r.record_id() == id)
                .collect(),
        ),
        (Some(name), None) => Listing::Records(
            records
                .into_iter()
                .filter(|r| r.record_name() == name)
                .collect(),
        ),
        (None, Some(id)) => {
            Listing::Records(records.into_iter().filter(|r| r.record_id() == id).collect())
        }
        (None, None) => Listing::Names(
            records
                .into_iter()
                .map(|r| r.record_name().to_string())
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec {
        id: Uuid,
        name: &'static str,
    }

    impl CatalogRecord for Rec {
        fn record_id(&self) -> Uuid {
            self.id
        }
        fn record_name(&self) -> &str {
            self.name
        }
    }

    fn records() -> (Vec<Rec>, Uuid, Uuid) {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let recs = vec![
            Rec { id: a, name: "Pizza" },
            Rec { id: b, name: "Pasta" },
        ];
        (recs, a, b)
    }

    #[test]
    fn no_filter_yields_names_only() {
        let (recs, _, _) = records();
        let listing = apply_filter(recs, &ListFilter::default());
        match listing {
            Listing::Names(names) => assert_eq!(names, vec!["Pizza", "Pasta"]),
            Listing::Records(_) => panic!("expected summary view"),
        }
    }

    #[test]
    fn name_filter_is_exact_and_case_sensitive() {
        let (recs, _, _) = records();
        let filter = ListFilter {
            name: Some("pizza".into()),
            id: None,
        };
        match apply_filter(recs, &filter) {
            Listing::Records(matched) => assert!(matched.is_empty()),
            Listing::Names(_) => panic!("expected records"),
        }
    }

    #[test]
    fn id_filter_matches_exactly() {
        let (recs, a, _) = records();
        let filter = ListFilter {
            name: None,
            id: Some(a),
        };
        match apply_filter(recs, &filter) {
            Listing::Records(matched) => {
                assert_eq!(matched.len(), 1);
                assert_eq!(matched[0].name, "Pizza");
            }
            Listing::Names(_) => panic!("expected records"),
        }
    }

    #[test]
    fn combined_filter_requires_both_to_match() {
        let (recs, a, _) = records();
        let filter = ListFilter {
            name: Some("Pasta".into()),
            id: Some(a),
        };
        match apply_filter(recs, &filter) {
            Listing::Records(matched) => assert!(matched.is_empty()),
            Listing::Names(_) => panic!("expected records"),
        }
    }

    #[test]
    fn empty_name_parameter_counts_as_absent() {
        let (recs, _, _) = records();
        let filter = ListFilter {
            name: Some(String::new()),
            id: None,
        };
        assert!(matches!(apply_filter(recs, &filter), Listing::Names(_)));
    }
}
