//! Built-in role definitions
//!
//! Three system roles are seeded on first run. Administrator holds every
//! permission code explicitly; there is no wildcard or implied grant.

use shared::Permission;

/// Seed definition for a built-in role
pub struct RoleSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub permissions: &'static [Permission],
}

pub const ADMINISTRATOR: RoleSeed = RoleSeed {
    name: "Administrator",
    description: "Full access to every area",
    permissions: &Permission::ALL,
};

pub const STORE_MANAGER: RoleSeed = RoleSeed {
    name: "Store Manager",
    description: "Catalog, inventory and sales management",
    permissions: &[
        Permission::DashboardView,
        Permission::ItemsView,
        Permission::ItemsEdit,
        Permission::CategoriesView,
        Permission::CategoriesEdit,
        Permission::InventoryView,
        Permission::InventoryAdjust,
        Permission::SalesView,
        Permission::SalesCreate,
        Permission::PosAccess,
    ],
};

pub const POS_OPERATOR: RoleSeed = RoleSeed {
    name: "POS Operator",
    description: "Point-of-sale terminal operation",
    permissions: &[
        Permission::ItemsView,
        Permission::CategoriesView,
        Permission::InventoryView,
        Permission::SalesCreate,
        Permission::PosAccess,
    ],
};

/// All built-in roles, in seeding order.
pub const BUILT_IN_ROLES: [&RoleSeed; 3] = [&ADMINISTRATOR, &STORE_MANAGER, &POS_OPERATOR];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_administrator_holds_every_code() {
        assert_eq!(ADMINISTRATOR.permissions.len(), Permission::ALL.len());
    }

    #[test]
    fn test_manager_cannot_manage_users_or_roles() {
        assert!(!STORE_MANAGER.permissions.contains(&Permission::UsersManage));
        assert!(!STORE_MANAGER.permissions.contains(&Permission::RolesManage));
        assert_eq!(STORE_MANAGER.permissions.len(), 10);
    }

    #[test]
    fn test_operator_is_minimal() {
        assert_eq!(POS_OPERATOR.permissions.len(), 5);
        assert!(POS_OPERATOR.permissions.contains(&Permission::PosAccess));
        assert!(!POS_OPERATOR.permissions.contains(&Permission::ItemsEdit));
    }
}
