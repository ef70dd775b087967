use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::common::{success_response, MessageResponse};
use crate::errors::ServiceError;
use crate::services::items::UpdateItemInput;
use crate::services::ListFilter;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateItemInput>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.items.update_item(id, input).await?;
    Ok(success_response(MessageResponse::new(
        "Updated successfully.",
    )))
}

async fn list_items(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let items = state.services.items.list_items(filter).await?;
    Ok(success_response(json!({ "items": items })))
}

async fn search_items(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let items = state
        .services
        .items
        .search_items(params.name.as_deref())
        .await?;
    Ok(success_response(json!({ "items": items })))
}

pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/item/update/:id", post(update_item))
        .route("/items", get(list_items))
        .route("/items/search", get(search_items))
}
