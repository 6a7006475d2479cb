//! REST API handlers for item operations
//!
//! This module implements the `/items` endpoints on top of the shared
//! [`ItemStore`](super::store::ItemStore).

use super::models::*;
use crate::{error::ApiError, state::SharedState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};

/// Creates routes for item-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/items", get(get_items).post(create_item))
        .route("/items/:item_id", get(get_item))
}

/// Endpoint: GET /items
/// Returns every item in insertion order.
async fn get_items(State(state): State<SharedState>) -> Json<Vec<Item>> {
    Json(state.items.list())
}

/// Endpoint: POST /items
/// Creates a new item; any `id` in the body is replaced by a generated one.
async fn create_item(
    State(state): State<SharedState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    // Only a JSON object is a valid body; arrays and scalars are rejected here.
    let Json(object) = body.map_err(|e| {
        tracing::debug!(error = %e.body_text(), "rejected item payload");
        ApiError::from(e)
    })?;

    let payload = ItemPayload::from_object(object).map_err(|e| {
        tracing::debug!(error = %e, "invalid item payload");
        ApiError::validation(e.to_string())
    })?;

    let item = state.items.create(NewItem::from(payload));
    tracing::info!(item_id = %item.id, name = %item.name, "created item");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Endpoint: GET /items/:item_id
async fn get_item(
    State(state): State<SharedState>,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.items.get_by_id(&item_id)?))
}
