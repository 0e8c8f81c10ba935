//! Permission Definitions
//!
//! Closed RBAC permission enumeration. Every grantable capability has exactly
//! one variant and one canonical `module:resource:action` code; anything
//! outside this set fails to parse. Keeping the set closed gives exhaustive
//! matches when new gating rules are added.

use serde::{Deserialize, Serialize, de};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One grantable capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Permission {
    /// View the admin dashboard
    DashboardView,
    /// Manage user accounts and role assignments
    UsersManage,
    /// Create and edit roles
    RolesManage,
    /// View catalog items
    ItemsView,
    /// Create and edit catalog items
    ItemsEdit,
    /// View categories
    CategoriesView,
    /// Create and edit categories
    CategoriesEdit,
    /// View per-store stock levels
    InventoryView,
    /// Adjust stock records
    InventoryAdjust,
    /// View sales orders
    SalesView,
    /// Create sales orders
    SalesCreate,
    /// Operate the POS terminal
    PosAccess,
}

impl Permission {
    /// Every permission in the system, in canonical order.
    pub const ALL: [Permission; 12] = [
        Permission::DashboardView,
        Permission::UsersManage,
        Permission::RolesManage,
        Permission::ItemsView,
        Permission::ItemsEdit,
        Permission::CategoriesView,
        Permission::CategoriesEdit,
        Permission::InventoryView,
        Permission::InventoryAdjust,
        Permission::SalesView,
        Permission::SalesCreate,
        Permission::PosAccess,
    ];

    /// Canonical `module:resource:action` code.
    pub const fn code(self) -> &'static str {
        match self {
            Permission::DashboardView => "core:dashboard:view",
            Permission::UsersManage => "admin:users:manage",
            Permission::RolesManage => "admin:roles:manage",
            Permission::ItemsView => "catalog:items:view",
            Permission::ItemsEdit => "catalog:items:edit",
            Permission::CategoriesView => "catalog:categories:view",
            Permission::CategoriesEdit => "catalog:categories:edit",
            Permission::InventoryView => "inventory:stock:view",
            Permission::InventoryAdjust => "inventory:stock:adjust",
            Permission::SalesView => "sales:orders:view",
            Permission::SalesCreate => "sales:orders:create",
            Permission::PosAccess => "pos:terminal:access",
        }
    }

    /// Module segment of the code (e.g. `catalog` for `catalog:items:edit`).
    pub fn module(self) -> &'static str {
        // Codes always carry three segments
        self.code().split(':').next().unwrap_or_default()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parse failure for a code outside the closed set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown permission code: {0}")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

// Serialize as the canonical code string so JSON payloads and the DB column
// both carry `module:resource:action` tokens.
impl Serialize for Permission {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(de::Error::custom)
    }
}
