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
use crate::services::categories::{CreateCategoryInput, UpdateCategoryInput};
use crate::services::items::{CreateItemInput, ItemOwner};
use crate::services::ListFilter;
use crate::AppState;

async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategoryInput>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.categories.create_category(input).await?;
    Ok(created_response(MessageResponse::new("Category created.")))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateCategoryInput>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.categories.update_category(id, input).await?;
    Ok(success_response(MessageResponse::new(
        "Updated successfully.",
    )))
}

async fn list_categories(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let categories = state.services.categories.list_categories(filter).await?;
    Ok(success_response(json!({ "categories": categories })))
}

async fn create_category_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateItemInput>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .services
        .items
        .create_item(ItemOwner::Category(id), input)
        .await?;
    Ok(created_response(MessageResponse::new("Item created.")))
}

async fn get_category_items(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let items = state
        .services
        .items
        .list_by_owner(ItemOwner::Category(id))
        .await?;
    Ok(success_response(json!({ "items": items })))
}

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/category/create", post(create_category))
        .route("/category/update/:id", post(update_category))
        .route("/categories", get(list_categories))
        .route("/category/:id/item/create", post(create_category_item))
        .route("/category/:id/items", get(get_category_items))
}
