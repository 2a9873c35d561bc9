//! Items demo routes backed by the in-memory store.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Json, Response};
use client::net::types::{Item, ItemList};

use super::{JsonBody, error_response};
use crate::state::AppState;

/// `GET /items`: all items in insertion order.
pub async fn list_items(State(state): State<AppState>) -> Json<ItemList> {
    let items = state.items.read().await.clone();
    Json(ItemList { items })
}

/// `POST /items`: store an item and echo it back.
pub async fn create_item(State(state): State<AppState>, JsonBody(mut item): JsonBody<Item>) -> Result<Json<Item>, Response> {
    item.name = item.name.trim().to_owned();
    if item.name.is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "Item name is required"));
    }
    state.items.write().await.push(item.clone());
    tracing::debug!(item_id = item.id, "item stored");
    Ok(Json(item))
}

#[cfg(test)]
#[path = "items_test.rs"]
mod tests;
