//! Route gate
//!
//! Coarse, ordered mapping from path prefixes to the permission a request
//! must hold to enter that area. Rules are evaluated top to bottom and the
//! first matching prefix wins; a path matching no rule is allowed through
//! (fine-grained checks still run in the handlers).

use shared::Permission;

/// One gating rule: paths starting with `prefix` require `required`.
#[derive(Debug, Clone)]
pub struct RouteRule {
    pub prefix: &'static str,
    pub required: Permission,
}

/// Ordered route gating rules
#[derive(Debug, Clone)]
pub struct RouteGate {
    rules: Vec<RouteRule>,
}

impl RouteGate {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// The standard rule table. More specific prefixes must come before the
    /// broader ones they shadow.
    pub fn standard() -> Self {
        Self::new(vec![
            RouteRule {
                prefix: "/api/users",
                required: Permission::UsersManage,
            },
            RouteRule {
                prefix: "/api/roles",
                required: Permission::RolesManage,
            },
            RouteRule {
                prefix: "/api/items",
                required: Permission::ItemsView,
            },
            RouteRule {
                prefix: "/api/categories",
                required: Permission::CategoriesView,
            },
            RouteRule {
                prefix: "/api/inventory",
                required: Permission::InventoryView,
            },
            RouteRule {
                prefix: "/api/orders",
                required: Permission::SalesView,
            },
            RouteRule {
                prefix: "/api/pos",
                required: Permission::PosAccess,
            },
        ])
    }

    /// Permission required for `path`, or `None` when no rule matches.
    pub fn required_for(&self, path: &str) -> Option<Permission> {
        self.rules
            .iter()
            .find(|rule| path.starts_with(rule.prefix))
            .map(|rule| rule.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let gate = RouteGate::new(vec![
            RouteRule {
                prefix: "/api/items/special",
                required: Permission::ItemsEdit,
            },
            RouteRule {
                prefix: "/api/items",
                required: Permission::ItemsView,
            },
        ]);
        assert_eq!(
            gate.required_for("/api/items/special/1"),
            Some(Permission::ItemsEdit)
        );
        assert_eq!(gate.required_for("/api/items/1"), Some(Permission::ItemsView));
    }

    #[test]
    fn test_no_match_is_open() {
        let gate = RouteGate::standard();
        assert_eq!(gate.required_for("/api/health"), None);
        assert_eq!(gate.required_for("/api/auth/login"), None);
    }

    #[test]
    fn test_standard_table() {
        let gate = RouteGate::standard();
        assert_eq!(
            gate.required_for("/api/users/7"),
            Some(Permission::UsersManage)
        );
        assert_eq!(
            gate.required_for("/api/inventory/adjust"),
            Some(Permission::InventoryView)
        );
    }
}
