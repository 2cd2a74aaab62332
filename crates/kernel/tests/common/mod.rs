#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common fixtures for integration tests.
//!
//! Tests run the real engine against the in-memory store and a fixture
//! host: a small menu resembling a stock install (dashboard, content
//! entries, native separators, one unmanageable entry) plus a three-role
//! table. The fixture `MenuProvider` implements role filtering the same
//! way a real host would: an entry survives when the role grants its
//! required permission.

#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use ordina_kernel::host::{MenuProvider, RoleProvider};
use ordina_kernel::menu::MenuEntry;
use ordina_kernel::models::role::ADMIN_ACCESS_PERMISSION;
use ordina_kernel::models::{Role, Viewer};
use ordina_kernel::service::MenuService;
use ordina_kernel::storage::MemoryStore;

/// Fixture host serving a fixed menu and role table.
pub struct FixtureHost {
    pub entries: Vec<MenuEntry>,
    pub roles: Vec<Role>,
}

impl FixtureHost {
    pub fn new() -> Self {
        Self {
            entries: sample_entries(),
            roles: sample_roles(),
        }
    }
}

impl Default for FixtureHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuProvider for FixtureHost {
    async fn list_menu_entries(&self, role_filter: Option<&str>) -> Result<Vec<MenuEntry>> {
        let Some(slug) = role_filter else {
            return Ok(self.entries.clone());
        };

        let role = self.roles.iter().find(|role| role.slug == slug);
        Ok(self
            .entries
            .iter()
            .filter(|entry| match role {
                Some(role) => role.grants(&entry.required_permission),
                None => entry.required_permission.is_empty(),
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RoleProvider for FixtureHost {
    async fn list_roles(&self) -> Result<Vec<Role>> {
        Ok(self.roles.clone())
    }
}

pub fn item(slug: &str, title: &str, permission: &str, position: i64) -> MenuEntry {
    MenuEntry {
        slug: slug.to_string(),
        title: title.to_string(),
        icon: String::new(),
        required_permission: permission.to_string(),
        is_separator: false,
        position,
    }
}

pub fn role(slug: &str, permissions: &[&str], user_count: usize) -> Role {
    Role {
        slug: slug.to_string(),
        name: slug.to_string(),
        permissions: permissions.iter().map(ToString::to_string).collect(),
        user_count,
    }
}

/// A stock-install shaped menu: two native separators, a permission-gated
/// tail, and one slug-less entry that cannot be managed.
pub fn sample_entries() -> Vec<MenuEntry> {
    vec![
        item("dashboard", "Dashboard", "", 2),
        MenuEntry::separator("separator1", 4),
        item(
            "posts",
            "Posts <span class=\"awaiting-mod\">3</span>",
            "edit posts",
            5,
        ),
        item("media", "Media", "upload files", 10),
        item("", "Legacy<br/>Panel", "", 15),
        item("options", "Options", "manage options", 20),
        MenuEntry::separator("separator2", 25),
    ]
}

pub fn sample_roles() -> Vec<Role> {
    vec![
        role(
            "administrator",
            &[
                ADMIN_ACCESS_PERMISSION,
                "edit posts",
                "upload files",
                "manage options",
            ],
            1,
        ),
        role(
            "editor",
            &[ADMIN_ACCESS_PERMISSION, "edit posts", "upload files"],
            3,
        ),
        role("subscriber", &["read comments"], 10),
    ]
}

pub fn admin_viewer() -> Viewer {
    Viewer::new(Uuid::now_v7(), vec![sample_roles()[0].clone()])
}

pub fn editor_viewer() -> Viewer {
    Viewer::new(Uuid::now_v7(), vec![sample_roles()[1].clone()])
}

/// Engine wired to the fixture host and a fresh in-memory store.
pub fn build_service() -> (MenuService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let host = Arc::new(FixtureHost::new());
    let service = MenuService::new(store.clone(), host.clone(), host);
    (service, store)
}
