//! Host collaborator traits.
//!
//! The engine never talks to a concrete host framework. The embedding
//! environment implements these traits and passes them in; the engine only
//! assumes a menu list that is rebuilt every render cycle and a role table
//! it can query as plain data.

use anyhow::Result;
use async_trait::async_trait;

use crate::menu::MenuEntry;
use crate::models::Role;

/// Supplies the live admin menu.
#[async_trait]
pub trait MenuProvider: Send + Sync {
    /// List the current menu entries in host order.
    ///
    /// With `role_filter`, restrict the list to entries whose required
    /// permission that role grants — used when editing a role-scoped
    /// layout, so administrators only arrange what the role can see.
    async fn list_menu_entries(&self, role_filter: Option<&str>) -> Result<Vec<MenuEntry>>;
}

/// Supplies the host's role table.
#[async_trait]
pub trait RoleProvider: Send + Sync {
    /// All roles known to the host, with permission sets and user counts.
    async fn list_roles(&self) -> Result<Vec<Role>>;
}
