//! User Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User entity (DB row, password hash never serialized)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    #[serde(skip_serializing, default)]
    pub hash_pass: String,
    pub is_active: bool,
}

/// User response (without password, with role names)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub is_active: bool,
    pub roles: Vec<String>,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(length(min = 3, max = 40, message = "Username must be 3 to 40 characters"))]
    pub username: String,
    pub display_name: Option<String>,
    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters"))]
    pub password: String,
    /// Role references (role IDs)
    #[serde(default)]
    pub role_ids: Vec<i64>,
}

/// Update user payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserUpdate {
    pub display_name: Option<String>,
    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters"))]
    pub password: Option<String>,
    pub role_ids: Option<Vec<i64>>,
    pub is_active: Option<bool>,
}
