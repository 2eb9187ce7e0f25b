//! Read-only JSON views of the inventory for programmatic clients.

use crate::{entities::inventory_item, errors::ServiceError, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ItemList {
    pub items: Vec<inventory_item::Model>,
    pub count: usize,
}

/// GET /api/v1/items
pub async fn list_items(State(state): State<AppState>) -> Result<Json<ItemList>, ServiceError> {
    let items = state.inventory_service.list_items().await?;
    Ok(Json(ItemList {
        count: items.len(),
        items,
    }))
}

/// GET /api/v1/items/:id
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<inventory_item::Model>, ServiceError> {
    state
        .inventory_service
        .get_item(id)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::item_not_found(id))
}
