//! Role API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::role;
use shared::models::{Role, RoleCreate, RoleUpdate};
use shared::{AppError, AppResult};

/// GET /api/roles - list roles
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Role>>> {
    let roles = role::find_all(state.get_pool()).await?;
    Ok(Json(roles))
}

/// POST /api/roles - create a custom role
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoleCreate>,
) -> AppResult<Json<Role>> {
    payload
        .validate()
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let created = role::create(state.get_pool(), payload).await?;
    Ok(Json(created))
}

/// PUT /api/roles/{id} - update a custom role (system roles are immutable)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RoleUpdate>,
) -> AppResult<Json<Role>> {
    payload
        .validate()
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let updated = role::update(state.get_pool(), id, payload).await?;
    Ok(Json(updated))
}
