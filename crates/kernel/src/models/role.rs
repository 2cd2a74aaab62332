//! Role data and canonical role queries.
//!
//! Roles are plain data handed over by the host's
//! [`RoleProvider`](crate::host::RoleProvider): a slug, a display name, the
//! granted permission set, and how many users hold the role. Everything the
//! engine needs — primary-role selection, admin-access checks, the settings
//! UI's role tabs — is answered by plain queries over that data.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Permission required to reach the admin area at all.
///
/// Roles without it never see the menu, so they are excluded from
/// role-scoped configuration.
pub const ADMIN_ACCESS_PERMISSION: &str = "access administration pages";

/// The standard roles, in canonical privilege order (highest first).
///
/// This fixed order drives the settings UI's role tabs and the default
/// editing-role selection.
pub const STANDARD_ROLES: [(&str, &str); 6] = [
    ("super_admin", "Super Admin"),
    ("administrator", "Administrator"),
    ("editor", "Editor"),
    ("author", "Author"),
    ("contributor", "Contributor"),
    ("subscriber", "Subscriber"),
];

/// A host role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Machine name, unique across the host.
    pub slug: String,

    /// Human-readable name.
    pub name: String,

    /// Granted permissions.
    #[serde(default)]
    pub permissions: HashSet<String>,

    /// Number of users currently assigned this role.
    #[serde(default)]
    pub user_count: usize,
}

impl Role {
    /// Whether this role may reach the admin area.
    ///
    /// `super_admin` is always admin-capable regardless of its recorded
    /// permission set.
    pub fn can_admin(&self) -> bool {
        self.slug == "super_admin" || self.permissions.contains(ADMIN_ACCESS_PERMISSION)
    }

    /// Number of granted permissions, the privilege measure used for
    /// primary-role selection and role ordering.
    pub fn permission_count(&self) -> usize {
        self.permissions.len()
    }

    /// Whether this role grants a permission. An empty requirement is
    /// granted to everyone.
    pub fn grants(&self, permission: &str) -> bool {
        permission.is_empty() || self.permissions.contains(permission)
    }
}

/// Settings-UI tab state for one standard role.
#[derive(Debug, Clone, Serialize)]
pub struct RoleTab {
    pub slug: String,
    pub name: String,

    /// At least one user holds the role.
    pub has_users: bool,

    /// The role may reach the admin area.
    pub can_admin: bool,
}

impl RoleTab {
    /// A tab is selectable when the role both has users and can reach the
    /// admin area.
    pub fn selectable(&self) -> bool {
        self.has_users && self.can_admin
    }
}

/// Roles eligible for role-scoped configuration: admin-capable, sorted by
/// permission count descending (ties by slug so the order is stable).
pub fn configurable_roles(roles: &[Role]) -> Vec<&Role> {
    let mut eligible: Vec<&Role> = roles.iter().filter(|role| role.can_admin()).collect();
    eligible.sort_by(|a, b| {
        b.permission_count()
            .cmp(&a.permission_count())
            .then_with(|| a.slug.cmp(&b.slug))
    });
    eligible
}

/// The canonical six standard roles as settings-UI tabs.
///
/// Roles absent from the host's table still get a (disabled) tab so the UI
/// stays stable across hosts.
pub fn standard_role_tabs(roles: &[Role]) -> Vec<RoleTab> {
    STANDARD_ROLES
        .iter()
        .map(|&(slug, default_name)| match roles.iter().find(|role| role.slug == slug) {
            Some(role) => RoleTab {
                slug: role.slug.clone(),
                name: role.name.clone(),
                has_users: role.user_count > 0,
                can_admin: role.can_admin(),
            },
            None => RoleTab {
                slug: slug.to_string(),
                name: default_name.to_string(),
                has_users: false,
                can_admin: false,
            },
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn role(slug: &str, permissions: &[&str], user_count: usize) -> Role {
        Role {
            slug: slug.to_string(),
            name: slug.to_string(),
            permissions: permissions.iter().map(ToString::to_string).collect(),
            user_count,
        }
    }

    #[test]
    fn can_admin_requires_access_permission() {
        let editor = role("editor", &[ADMIN_ACCESS_PERMISSION, "edit posts"], 3);
        let subscriber = role("subscriber", &["read comments"], 10);

        assert!(editor.can_admin());
        assert!(!subscriber.can_admin());
    }

    #[test]
    fn super_admin_is_always_admin_capable() {
        let super_admin = role("super_admin", &[], 1);
        assert!(super_admin.can_admin());
    }

    #[test]
    fn grants_empty_permission_to_everyone() {
        let subscriber = role("subscriber", &[], 1);
        assert!(subscriber.grants(""));
        assert!(!subscriber.grants("manage options"));
    }

    #[test]
    fn configurable_roles_sorted_by_privilege() {
        let roles = vec![
            role("editor", &[ADMIN_ACCESS_PERMISSION, "edit posts"], 2),
            role("subscriber", &["read comments"], 5),
            role(
                "administrator",
                &[ADMIN_ACCESS_PERMISSION, "edit posts", "manage options"],
                1,
            ),
        ];

        let eligible = configurable_roles(&roles);
        let slugs: Vec<&str> = eligible.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["administrator", "editor"]);
    }

    #[test]
    fn configurable_roles_tie_breaks_by_slug() {
        let roles = vec![
            role("editor", &[ADMIN_ACCESS_PERMISSION], 1),
            role("author", &[ADMIN_ACCESS_PERMISSION], 1),
        ];

        let eligible = configurable_roles(&roles);
        let slugs: Vec<&str> = eligible.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["author", "editor"]);
    }

    #[test]
    fn standard_tabs_keep_canonical_order_and_flags() {
        let roles = vec![
            role("administrator", &[ADMIN_ACCESS_PERMISSION], 1),
            role("editor", &[ADMIN_ACCESS_PERMISSION], 0),
            role("subscriber", &[], 7),
        ];

        let tabs = standard_role_tabs(&roles);
        assert_eq!(tabs.len(), 6);
        assert_eq!(tabs[0].slug, "super_admin");
        assert!(!tabs[0].has_users);

        let admin = &tabs[1];
        assert!(admin.selectable());

        let editor = &tabs[2];
        assert!(editor.can_admin);
        assert!(!editor.selectable());

        let subscriber = &tabs[5];
        assert!(subscriber.has_users);
        assert!(!subscriber.selectable());
    }
}
