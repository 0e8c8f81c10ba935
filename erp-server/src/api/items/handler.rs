//! Item API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::item;
use shared::models::{Item, ItemCreate, ItemUpdate};
use shared::{AppError, AppResult};

/// GET /api/items - list items
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Item>>> {
    let items = item::find_all(state.get_pool()).await?;
    Ok(Json(items))
}

/// GET /api/items/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Item>> {
    let found = item::find_by_id(state.get_pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;
    Ok(Json(found))
}

/// POST /api/items - create an item
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ItemCreate>,
) -> AppResult<Json<Item>> {
    payload
        .validate_payload()
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let created = item::create(state.get_pool(), payload).await?;
    Ok(Json(created))
}

/// PUT /api/items/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ItemUpdate>,
) -> AppResult<Json<Item>> {
    let pool = state.get_pool();

    // Cross-field rules are checked against the values that will persist
    let current = item::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;
    payload
        .validate_payload(&current)
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let updated = item::update(pool, id, payload).await?;
    Ok(Json(updated))
}
