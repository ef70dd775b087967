mod common;

use common::TestApp;
use rust_decimal_macros::dec;
use sea_orm::EntityTrait;
use uuid::Uuid;

use catalog_api::{
    entities::{CategoryModel, Item, SubCategoryModel},
    errors::ServiceError,
    services::{
        categories::CreateCategoryInput,
        items::{CreateItemInput, ItemOwner, UpdateItemInput},
        subcategories::CreateSubCategoryInput,
    },
};

async fn setup_electronics(app: &TestApp) -> CategoryModel {
    app.state
        .services
        .categories
        .create_category(CreateCategoryInput {
            name: "Electronics".to_string(),
            image: "https://cdn.example.com/electronics.png".to_string(),
            description: "Category for electronic products".to_string(),
            tax_applicable: true,
            tax: Some(dec!(18)),
        })
        .await
        .expect("Failed to create category")
}

async fn setup_phones(app: &TestApp, parent_id: Uuid) -> SubCategoryModel {
    app.state
        .services
        .subcategories
        .create_subcategory(
            parent_id,
            CreateSubCategoryInput {
                name: "Phones".to_string(),
                image: "https://cdn.example.com/phones.png".to_string(),
                description: "Smartphones and accessories".to_string(),
                tax_applicable: None,
                tax: None,
            },
        )
        .await
        .expect("Failed to create subcategory")
}

fn laptop_input(name: &str) -> CreateItemInput {
    CreateItemInput {
        name: name.to_string(),
        image: "https://cdn.example.com/laptop.png".to_string(),
        description: "A portable computer".to_string(),
        tax_applicable: true,
        tax: Some(dec!(18)),
        base_amount: dec!(999.99),
        discount: dec!(100),
    }
}

#[tokio::test]
async fn total_is_derived_on_create() {
    let app = TestApp::new().await;
    let category = setup_electronics(&app).await;

    let item = app
        .state
        .services
        .items
        .create_item(ItemOwner::Category(category.id), laptop_input("Laptop"))
        .await
        .expect("Failed to create item");

    assert_eq!(item.total_amount, dec!(899.99));
    assert_eq!(item.category_id, Some(category.id));
    assert_eq!(item.subcategory_id, None);
}

#[tokio::test]
async fn item_under_subcategory_sets_exactly_one_owner() {
    let app = TestApp::new().await;
    let category = setup_electronics(&app).await;
    let subcategory = setup_phones(&app, category.id).await;

    let item = app
        .state
        .services
        .items
        .create_item(ItemOwner::SubCategory(subcategory.id), laptop_input("Phone"))
        .await
        .expect("Failed to create item");

    assert_eq!(item.subcategory_id, Some(subcategory.id));
    assert_eq!(item.category_id, None);
}

#[tokio::test]
async fn missing_owner_fails_and_persists_nothing() {
    let app = TestApp::new().await;

    let err = app
        .state
        .services
        .items
        .create_item(ItemOwner::Category(Uuid::new_v4()), laptop_input("Laptop"))
        .await
        .expect_err("Creating under a missing owner must fail");
    assert!(matches!(err, ServiceError::NotFound(_)));

    let all = Item::find()
        .all(&*app.state.db)
        .await
        .expect("Failed to list items");
    assert!(all.is_empty());
}

#[tokio::test]
async fn discount_larger_than_base_is_rejected() {
    let app = TestApp::new().await;
    let category = setup_electronics(&app).await;

    let mut input = laptop_input("Laptop");
    input.discount = dec!(1000);

    let err = app
        .state
        .services
        .items
        .create_item(ItemOwner::Category(category.id), input)
        .await
        .expect_err("Discount above base_amount must fail");
    assert!(matches!(err, ServiceError::ValidationError(_)));
}

#[tokio::test]
async fn full_discount_is_allowed_at_the_boundary() {
    let app = TestApp::new().await;
    let category = setup_electronics(&app).await;

    let mut input = laptop_input("Freebie");
    input.discount = input.base_amount;

    let item = app
        .state
        .services
        .items
        .create_item(ItemOwner::Category(category.id), input)
        .await
        .expect("Discount equal to base_amount is valid");
    assert_eq!(item.total_amount, dec!(0));
}

#[tokio::test]
async fn total_is_recomputed_from_merged_view_on_update() {
    let app = TestApp::new().await;
    let category = setup_electronics(&app).await;
    let service = &app.state.services.items;

    let item = service
        .create_item(ItemOwner::Category(category.id), laptop_input("Laptop"))
        .await
        .expect("Failed to create item");

    // Patch only the discount; base_amount comes from the stored record.
    service
        .update_item(
            item.id,
            UpdateItemInput {
                discount: Some(dec!(150)),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update item");

    let reloaded = Item::find_by_id(item.id)
        .one(&*app.state.db)
        .await
        .expect("Failed to reload")
        .expect("Item must exist");
    assert_eq!(reloaded.discount, dec!(150));
    assert_eq!(reloaded.total_amount, dec!(849.99));
}

#[tokio::test]
async fn update_not_touching_amounts_keeps_total() {
    let app = TestApp::new().await;
    let category = setup_electronics(&app).await;
    let service = &app.state.services.items;

    let item = service
        .create_item(ItemOwner::Category(category.id), laptop_input("Laptop"))
        .await
        .expect("Failed to create item");

    service
        .update_item(
            item.id,
            UpdateItemInput {
                description: Some("A very portable computer".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update item");

    let reloaded = Item::find_by_id(item.id)
        .one(&*app.state.db)
        .await
        .expect("Failed to reload")
        .expect("Item must exist");
    assert_eq!(reloaded.total_amount, dec!(899.99));
    assert_eq!(reloaded.description, "A very portable computer");
}

#[tokio::test]
async fn merged_update_validates_patched_amounts() {
    let app = TestApp::new().await;
    let category = setup_electronics(&app).await;
    let service = &app.state.services.items;

    let item = service
        .create_item(ItemOwner::Category(category.id), laptop_input("Laptop"))
        .await
        .expect("Failed to create item");

    // Discount above the stored base_amount must fail on the merged view.
    let err = service
        .update_item(
            item.id,
            UpdateItemInput {
                discount: Some(dec!(5000)),
                ..Default::default()
            },
        )
        .await
        .expect_err("Merged discount above base must fail");
    assert!(matches!(err, ServiceError::ValidationError(_)));
}

#[tokio::test]
async fn amount_update_of_missing_id_is_a_noop_success() {
    let app = TestApp::new().await;

    app.state
        .services
        .items
        .update_item(
            Uuid::new_v4(),
            UpdateItemInput {
                discount: Some(dec!(10)),
                ..Default::default()
            },
        )
        .await
        .expect("Updating a missing id is the documented no-op contract");
}

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let app = TestApp::new().await;
    let category = setup_electronics(&app).await;
    let service = &app.state.services.items;

    service
        .create_item(ItemOwner::Category(category.id), laptop_input("Laptop"))
        .await
        .expect("Failed to create item");
    service
        .create_item(ItemOwner::Category(category.id), laptop_input("Laptop Pro"))
        .await
        .expect("Failed to create item");
    service
        .create_item(ItemOwner::Category(category.id), laptop_input("Desktop"))
        .await
        .expect("Failed to create item");

    let matches = service
        .search_items(Some("lap"))
        .await
        .expect("Failed to search");
    let mut names: Vec<_> = matches.into_iter().map(|i| i.name).collect();
    names.sort();
    assert_eq!(names, vec!["Laptop".to_string(), "Laptop Pro".to_string()]);
}

#[tokio::test]
async fn empty_search_returns_nothing_not_everything() {
    let app = TestApp::new().await;
    let category = setup_electronics(&app).await;
    let service = &app.state.services.items;

    service
        .create_item(ItemOwner::Category(category.id), laptop_input("Laptop"))
        .await
        .expect("Failed to create item");

    assert!(service
        .search_items(None)
        .await
        .expect("Failed to search")
        .is_empty());
    assert!(service
        .search_items(Some(""))
        .await
        .expect("Failed to search")
        .is_empty());
}

#[tokio::test]
async fn list_by_owner_partitions_items() {
    let app = TestApp::new().await;
    let category = setup_electronics(&app).await;
    let subcategory = setup_phones(&app, category.id).await;
    let service = &app.state.services.items;

    service
        .create_item(ItemOwner::Category(category.id), laptop_input("Laptop"))
        .await
        .expect("Failed to create item");
    service
        .create_item(ItemOwner::SubCategory(subcategory.id), laptop_input("Phone"))
        .await
        .expect("Failed to create item");

    let category_items = service
        .list_by_owner(ItemOwner::Category(category.id))
        .await
        .expect("Failed to list category items");
    assert_eq!(category_items.len(), 1);
    assert_eq!(category_items[0].name, "Laptop");

    let subcategory_items = service
        .list_by_owner(ItemOwner::SubCategory(subcategory.id))
        .await
        .expect("Failed to list subcategory items");
    assert_eq!(subcategory_items.len(), 1);
    assert_eq!(subcategory_items[0].name, "Phone");
}

#[tokio::test]
async fn unknown_owner_lists_empty_not_error() {
    let app = TestApp::new().await;

    let items = app
        .state
        .services
        .items
        .list_by_owner(ItemOwner::SubCategory(Uuid::new_v4()))
        .await
        .expect("Unknown owner is not an error");
    assert!(items.is_empty());
}
