//! Category API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::category;
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::{AppError, AppResult};

/// GET /api/categories - list categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = category::find_all(state.get_pool()).await?;
    Ok(Json(categories))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Category>> {
    let found = category::find_by_id(state.get_pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))?;
    Ok(Json(found))
}

/// POST /api/categories - create a category
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    payload
        .validate_payload()
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let created = category::create(state.get_pool(), payload).await?;
    Ok(Json(created))
}

/// PUT /api/categories/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    payload
        .validate_payload()
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let updated = category::update(state.get_pool(), id, payload).await?;
    Ok(Json(updated))
}
