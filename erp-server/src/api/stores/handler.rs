//! Store API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::store;
use shared::models::{Store, StoreCreate, StoreUpdate};
use shared::{AppError, AppResult};

/// GET /api/stores - list stores
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Store>>> {
    let stores = store::find_all(state.get_pool()).await?;
    Ok(Json(stores))
}

/// GET /api/stores/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Store>> {
    let found = store::find_by_id(state.get_pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Store {id} not found")))?;
    Ok(Json(found))
}

/// POST /api/stores - create a store
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StoreCreate>,
) -> AppResult<Json<Store>> {
    payload
        .validate()
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let created = store::create(state.get_pool(), payload).await?;
    Ok(Json(created))
}

/// PUT /api/stores/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StoreUpdate>,
) -> AppResult<Json<Store>> {
    payload
        .validate()
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let updated = store::update(state.get_pool(), id, payload).await?;
    Ok(Json(updated))
}
