//! Store Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Store entity (a physical location holding stock)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Store {
    pub id: i64,
    /// Short unique code (e.g. "HQ", "DT-01")
    pub code: String,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_active: bool,
}

/// Create store payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StoreCreate {
    #[validate(length(min = 2, max = 16, message = "Code must be 2 to 16 characters"))]
    pub code: String,
    #[validate(length(min = 2, max = 80, message = "Name must be 2 to 80 characters"))]
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Update store payload
///
/// Partial update: absent fields keep their stored value. JSON `null` is the
/// same as an absent field, so `city` and `state` cannot be cleared here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StoreUpdate {
    #[validate(length(min = 2, max = 80, message = "Name must be 2 to 80 characters"))]
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_active: Option<bool>,
}
