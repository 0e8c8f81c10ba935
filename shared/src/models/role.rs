//! Role Model

use crate::permission::Permission;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role entity (RBAC)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// JSON array of permission codes (e.g. ["catalog:items:edit"])
    #[cfg_attr(feature = "db", sqlx(json))]
    pub permissions: Vec<Permission>,
    pub is_system: bool,
    pub is_active: bool,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleCreate {
    #[validate(length(min = 2, max = 80, message = "Name must be 2 to 80 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<Permission>,
}

/// Update role payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleUpdate {
    #[validate(length(min = 2, max = 80, message = "Name must be 2 to 80 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<Permission>>,
    pub is_active: Option<bool>,
}
