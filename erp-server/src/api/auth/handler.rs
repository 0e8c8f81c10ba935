//! Auth API handlers
//!
//! Registration is a first-run affordance: it stays open only while the user
//! table is empty, and the one user it creates triggers the role bootstrap
//! and becomes the Administrator.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::{CurrentUser, bootstrap, resolve_permissions};
use crate::auth::password::{hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::{role, user};
use crate::security_log;
use shared::models::{UserCreate, UserResponse};
use shared::{AppError, AppResult, ErrorCode};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// POST /api/auth/register - create the first user (first run only)
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<AuthResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::from_validation_errors(&e))?;

    let pool = state.get_pool();

    let existing = user::count(pool).await?;
    if existing > 0 {
        security_log!(
            "WARN",
            "registration_closed",
            username = payload.username.clone()
        );
        return Err(AppError::new(ErrorCode::RegistrationClosed));
    }

    let hash = hash_password(&payload.password)?;

    // No roles exist yet; the bootstrap assigns Administrator below
    let mut payload = payload;
    payload.role_ids.clear();
    let created = user::create(pool, &payload, &hash).await?;

    bootstrap::ensure_default_roles(pool, created.id).await?;

    let roles = role::find_for_user(pool, created.id).await?;
    let permissions = resolve_permissions(&roles);
    let token = state
        .jwt_service
        .generate_token(created.id, &created.username, &permissions)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    security_log!(
        "INFO",
        "first_user_registered",
        user_id = created.id,
        username = created.username.clone()
    );

    Ok(Json(AuthResponse {
        token,
        user: UserResponse {
            id: created.id,
            username: created.username,
            display_name: created.display_name,
            is_active: created.is_active,
            roles: roles.into_iter().map(|r| r.name).collect(),
        },
    }))
}

/// POST /api/auth/login - credentials to JWT
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let pool = state.get_pool();

    let Some(found) = user::find_by_username(pool, &payload.username).await? else {
        security_log!(
            "WARN",
            "login_failed",
            username = payload.username.clone(),
            reason = "unknown user"
        );
        return Err(AppError::invalid_credentials());
    };

    if !verify_password(&payload.password, &found.hash_pass) {
        security_log!(
            "WARN",
            "login_failed",
            username = payload.username.clone(),
            reason = "bad password"
        );
        return Err(AppError::invalid_credentials());
    }

    if !found.is_active {
        security_log!(
            "WARN",
            "login_disabled_account",
            username = payload.username.clone()
        );
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }

    let roles = role::find_for_user(pool, found.id).await?;
    let permissions = resolve_permissions(&roles);
    let token = state
        .jwt_service
        .generate_token(found.id, &found.username, &permissions)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    security_log!("INFO", "login_ok", user_id = found.id, username = found.username.clone());

    Ok(Json(AuthResponse {
        token,
        user: UserResponse {
            id: found.id,
            username: found.username,
            display_name: found.display_name,
            is_active: found.is_active,
            roles: roles.into_iter().map(|r| r.name).collect(),
        },
    }))
}

/// GET /api/auth/me - the authenticated user
pub async fn me(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<UserResponse>> {
    let pool = state.get_pool();

    let found = user::find_by_id(pool, current.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", current.id)))?;
    let roles = user::role_names(pool, found.id).await?;

    Ok(Json(UserResponse {
        id: found.id,
        username: found.username,
        display_name: found.display_name,
        is_active: found.is_active,
        roles,
    }))
}
