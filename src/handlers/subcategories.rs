use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use super::common::{created_response, success_response, MessageResponse};
use crate::errors::ServiceError;
use crate::services::items::{CreateItemInput, ItemOwner};
use crate::services::subcategories::{CreateSubCategoryInput, UpdateSubCategoryInput};
use crate::services::ListFilter;
use crate::AppState;

async fn create_subcategory(
    State(state): State<AppState>,
    Path(parent_id): Path<Uuid>,
    Json(input): Json<CreateSubCategoryInput>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .services
        .subcategories
        .create_subcategory(parent_id, input)
        .await?;
    Ok(created_response(MessageResponse::new(
        "Subcategory created successfully.",
    )))
}

async fn update_subcategory(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateSubCategoryInput>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .services
        .subcategories
        .update_subcategory(id, input)
        .await?;
    Ok(success_response(MessageResponse::new(
        "Updated successfully.",
    )))
}

async fn list_subcategories(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let subcategories = state
        .services
        .subcategories
        .list_subcategories(filter)
        .await?;
    Ok(success_response(json!({ "subcategories": subcategories })))
}

async fn list_subcategories_by_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let subcategories = state
        .services
        .subcategories
        .list_by_parent(parent_id)
        .await?;
    Ok(success_response(json!({ "subcategories": subcategories })))
}

async fn create_subcategory_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateItemInput>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .services
        .items
        .create_item(ItemOwner::SubCategory(id), input)
        .await?;
    Ok(created_response(MessageResponse::new("Item created.")))
}

async fn get_subcategory_items(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let items = state
        .services
        .items
        .list_by_owner(ItemOwner::SubCategory(id))
        .await?;
    Ok(success_response(json!({ "items": items })))
}

pub fn subcategory_routes() -> Router<AppState> {
    Router::new()
        .route("/subcategory/create/:id", post(create_subcategory))
        .route("/subcategory/update/:id", post(update_subcategory))
        .route("/subcategories", get(list_subcategories))
        .route("/subcategories/:parent", get(list_subcategories_by_parent))
        .route("/subcategory/:id/item/create", post(create_subcategory_item))
        .route("/subcategory/:id/items", get(get_subcategory_items))
}
