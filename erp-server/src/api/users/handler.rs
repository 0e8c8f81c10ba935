//! User API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::auth::password::hash_password;
use crate::core::ServerState;
use crate::db::repository::user;
use shared::models::{UserCreate, UserResponse, UserUpdate};
use shared::{AppError, AppResult};

async fn to_response(state: &ServerState, u: shared::models::User) -> AppResult<UserResponse> {
    let roles = user::role_names(state.get_pool(), u.id).await?;
    Ok(UserResponse {
        id: u.id,
        username: u.username,
        display_name: u.display_name,
        is_active: u.is_active,
        roles,
    })
}

/// GET /api/users - list users with their role names
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = user::find_all(state.get_pool()).await?;

    let mut responses = Vec::with_capacity(users.len());
    for u in users {
        responses.push(to_response(&state, u).await?);
    }
    Ok(Json(responses))
}

/// POST /api/users - create a user with role assignments
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<UserResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let hash = hash_password(&payload.password)?;
    let created = user::create(state.get_pool(), &payload, &hash).await?;
    let response = to_response(&state, created).await?;
    Ok(Json(response))
}

/// PUT /api/users/{id} - update profile, password or role assignments
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<UserResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let hash = match &payload.password {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    let updated = user::update(state.get_pool(), id, &payload, hash.as_deref()).await?;
    let response = to_response(&state, updated).await?;
    Ok(Json(response))
}
