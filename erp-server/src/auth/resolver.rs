//! Permission resolution
//!
//! A user's effective permission set is the union of the permission sets of
//! their active roles. The result is an ordered set, so resolution is
//! insensitive to role order and duplicate grants.

use std::collections::BTreeSet;

use shared::Permission;
use shared::models::Role;

/// Union the permission sets of the given roles.
///
/// Inactive roles contribute nothing. Duplicates collapse via the set.
pub fn resolve_permissions(roles: &[Role]) -> BTreeSet<Permission> {
    roles
        .iter()
        .filter(|r| r.is_active)
        .flat_map(|r| r.permissions.iter().copied())
        .collect()
}

/// Exact membership check. There are no wildcard or implied grants.
pub fn authorize(permissions: &BTreeSet<Permission>, required: Permission) -> bool {
    permissions.contains(&required)
}

/// True when at least one of `required` is held. An empty list grants
/// nothing, so it always denies.
pub fn authorize_any(permissions: &BTreeSet<Permission>, required: &[Permission]) -> bool {
    required.iter().any(|p| authorize(permissions, *p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str, permissions: Vec<Permission>, is_active: bool) -> Role {
        Role {
            id: 0,
            name: name.to_string(),
            description: None,
            permissions,
            is_system: false,
            is_active,
        }
    }

    #[test]
    fn test_union_and_dedup() {
        let roles = vec![
            role(
                "a",
                vec![Permission::ItemsView, Permission::ItemsEdit],
                true,
            ),
            role(
                "b",
                vec![Permission::ItemsView, Permission::InventoryView],
                true,
            ),
        ];
        let resolved = resolve_permissions(&roles);
        assert_eq!(resolved.len(), 3);
        assert!(resolved.contains(&Permission::ItemsEdit));
        assert!(resolved.contains(&Permission::InventoryView));
    }

    #[test]
    fn test_role_order_does_not_matter() {
        let a = role("a", vec![Permission::ItemsView, Permission::PosAccess], true);
        let b = role("b", vec![Permission::SalesCreate], true);

        let forward = resolve_permissions(&[a.clone(), b.clone()]);
        let backward = resolve_permissions(&[b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_inactive_roles_contribute_nothing() {
        let roles = vec![role("a", vec![Permission::UsersManage], false)];
        assert!(resolve_permissions(&roles).is_empty());
    }

    #[test]
    fn test_authorize_is_exact_membership() {
        let permissions = resolve_permissions(&[role("a", vec![Permission::ItemsView], true)]);
        assert!(authorize(&permissions, Permission::ItemsView));
        assert!(!authorize(&permissions, Permission::ItemsEdit));
    }

    #[test]
    fn test_authorize_any_empty_list_denies() {
        let permissions = resolve_permissions(&[role(
            "a",
            Permission::ALL.to_vec(),
            true,
        )]);
        // Even a fully-privileged user is denied when nothing is required
        assert!(!authorize_any(&permissions, &[]));
    }

    #[test]
    fn test_authorize_any_single_match() {
        let permissions = resolve_permissions(&[role("a", vec![Permission::SalesView], true)]);
        assert!(authorize_any(
            &permissions,
            &[Permission::UsersManage, Permission::SalesView]
        ));
        assert!(!authorize_any(
            &permissions,
            &[Permission::UsersManage, Permission::RolesManage]
        ));
    }
}
