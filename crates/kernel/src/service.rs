//! Engine operation surface consumed by the transport/UI layer.
//!
//! The service wires scope resolution, storage, reconciliation, and the
//! codec together behind the operations the host exposes over its own
//! transport. Authorization happens before these calls: the host only
//! hands in already-authorized requests, with the viewer context passed
//! explicitly every time.

use std::sync::Arc;

use tracing::{debug, info};

use crate::codec::{self, ExchangeDocument};
use crate::config::{ApplyTo, ConfigDocument, PluginSettings, sanitize_slugs};
use crate::error::{KernelError, KernelResult};
use crate::host::{MenuProvider, RoleProvider};
use crate::menu::{self, MenuEntry, ResolvedEntry};
use crate::models::Viewer;
use crate::models::role::{RoleTab, configurable_roles, standard_role_tabs};
use crate::scope::{self, ScopeKey};
use crate::storage::{ConfigStore, KeyValueStore};

/// Settings-page listing for one editing context.
#[derive(Debug)]
pub struct EditorView {
    /// Role being edited; `None` outside role mode or when no standard
    /// role qualifies (role editing disabled).
    pub active_role: Option<String>,

    /// Entries in saved order with hidden flags, titles normalized.
    pub items: Vec<ResolvedEntry>,

    /// Titles of host entries that cannot be managed (empty slug).
    pub unmanageable: Vec<String>,

    /// The canonical role tabs with their enabled/disabled state.
    pub role_tabs: Vec<RoleTab>,
}

/// The menu configuration engine.
pub struct MenuService {
    store: ConfigStore,
    menus: Arc<dyn MenuProvider>,
    roles: Arc<dyn RoleProvider>,
}

impl MenuService {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        menus: Arc<dyn MenuProvider>,
        roles: Arc<dyn RoleProvider>,
    ) -> Self {
        Self {
            store: ConfigStore::new(store),
            menus,
            roles,
        }
    }

    /// Current plugin settings (defaults when never saved).
    pub async fn settings(&self) -> KernelResult<PluginSettings> {
        Ok(self.store.load_settings().await?)
    }

    /// Resolve the viewer's scope and produce the final menu.
    ///
    /// Role scoping falls back to the global scope for a role-less viewer,
    /// and a role with no saved document falls back to the global
    /// document. A scope without any document means "no customization":
    /// the host ordering comes through untouched.
    pub async fn resolved_menu(
        &self,
        viewer: &Viewer,
        show_all: bool,
    ) -> KernelResult<Vec<ResolvedEntry>> {
        let settings = self.store.load_settings().await?;
        let entries = self.menus.list_menu_entries(None).await?;

        let scope = match scope::resolve(&settings, viewer) {
            Ok(scope) => scope,
            Err(KernelError::NoScope) => {
                debug!(viewer = %viewer.id, "viewer holds no roles, using global scope");
                ScopeKey::Global
            }
            Err(error) => return Err(error),
        };

        let doc = match &scope {
            ScopeKey::Role(_) => match self.store.load_layout(&scope).await? {
                Some(doc) => Some(doc),
                None => self.store.load_layout(&ScopeKey::Global).await?,
            },
            _ => self.store.load_layout(&scope).await?,
        }
        .unwrap_or_default();

        Ok(menu::reconcile(&entries, &doc, show_all))
    }

    /// Save a scope's full layout (order and hidden set) in one write.
    pub async fn save_all(
        &self,
        viewer: &Viewer,
        order: Vec<String>,
        hidden: Vec<String>,
        role: Option<&str>,
    ) -> KernelResult<()> {
        let settings = self.store.load_settings().await?;
        let scope = self.write_scope(&settings, viewer, role).await?;

        let doc = ConfigDocument {
            order: sanitize_slugs(order),
            hidden: sanitize_slugs(hidden),
        };
        self.store.save_layout(&scope, &doc).await?;

        info!(%scope, order = doc.order.len(), hidden = doc.hidden.len(), "saved menu layout");
        Ok(())
    }

    /// Save the global settings document.
    pub async fn save_settings(
        &self,
        apply_to: ApplyTo,
        hide_collapse_toggle: bool,
    ) -> KernelResult<()> {
        let settings = PluginSettings {
            apply_to,
            hide_collapse_toggle,
        };
        self.store.save_settings(&settings).await?;

        info!(apply_to = apply_to.as_str(), "saved plugin settings");
        Ok(())
    }

    /// Delete a scope's layout, returning it to host defaults.
    pub async fn reset_scope(&self, viewer: &Viewer, role: Option<&str>) -> KernelResult<()> {
        let settings = self.store.load_settings().await?;
        let scope = self.write_scope(&settings, viewer, role).await?;

        let existed = self.store.delete_layout(&scope).await?;
        info!(%scope, existed, "reset menu layout");
        Ok(())
    }

    /// Export a scope's configuration as an exchange document.
    pub async fn export_scope(
        &self,
        viewer: &Viewer,
        role: Option<&str>,
    ) -> KernelResult<ExchangeDocument> {
        let settings = self.store.load_settings().await?;
        let scope = self.write_scope(&settings, viewer, role).await?;

        let doc = self.store.load_layout(&scope).await?.unwrap_or_default();
        let scope_role = match &scope {
            ScopeKey::Role(slug) => Some(slug.as_str()),
            _ => None,
        };
        Ok(codec::encode(&doc, &settings, scope_role))
    }

    /// Import an already-decoded exchange document into a scope.
    ///
    /// Outside role mode, an included `settings.apply_to` is applied; a
    /// role-scoped import never touches global settings.
    pub async fn import_scope(
        &self,
        viewer: &Viewer,
        doc: ExchangeDocument,
        role: Option<&str>,
    ) -> KernelResult<()> {
        let settings = self.store.load_settings().await?;
        let scope = self.write_scope(&settings, viewer, role).await?;

        let layout = ConfigDocument {
            order: doc.order,
            hidden: doc.hidden,
        };
        self.store.save_layout(&scope, &layout).await?;

        if !matches!(scope, ScopeKey::Role(_))
            && let Some(imported) = doc.settings
        {
            let updated = PluginSettings {
                apply_to: imported.apply_to,
                hide_collapse_toggle: settings.hide_collapse_toggle,
            };
            self.store.save_settings(&updated).await?;
        }

        info!(%scope, "imported menu configuration");
        Ok(())
    }

    /// Uninstall cleanup: delete every engine document across all scopes.
    pub async fn purge_all(&self) -> KernelResult<usize> {
        let deleted = self.store.purge().await?;
        info!(deleted, "purged menu configuration");
        Ok(deleted)
    }

    /// Cleaned titles of host entries that cannot be managed because they
    /// carry no slug. Surfaced as a settings-page warning.
    pub async fn unmanageable_titles(&self) -> KernelResult<Vec<String>> {
        let entries = self.menus.list_menu_entries(None).await?;

        Ok(entries
            .iter()
            .filter(|entry| !entry.is_manageable() && !entry.is_separator)
            .map(|entry| menu::strip_title(&entry.title))
            .filter(|title| !title.is_empty())
            .collect())
    }

    /// Assemble the settings-page listing for the active editing context.
    pub async fn editor_items(
        &self,
        viewer: &Viewer,
        requested_role: Option<&str>,
    ) -> KernelResult<EditorView> {
        let settings = self.store.load_settings().await?;
        let host_roles = self.roles.list_roles().await?;

        let active_role = if settings.apply_to == ApplyTo::Role {
            scope::resolve_editing_role(requested_role, &host_roles)
        } else {
            None
        };

        let scope = match (settings.apply_to, &active_role) {
            (ApplyTo::Role, Some(slug)) => ScopeKey::Role(slug.clone()),
            (ApplyTo::User, _) => ScopeKey::User(viewer.id),
            _ => ScopeKey::Global,
        };
        let doc = self.store.load_layout(&scope).await?.unwrap_or_default();

        let entries: Vec<MenuEntry> = self
            .menus
            .list_menu_entries(active_role.as_deref())
            .await?
            .into_iter()
            .map(|mut entry| {
                entry.title = menu::strip_title(&entry.title);
                entry
            })
            .collect();

        Ok(EditorView {
            active_role,
            items: menu::reconcile(&entries, &doc, false),
            unmanageable: self.unmanageable_titles().await?,
            role_tabs: standard_role_tabs(&host_roles),
        })
    }

    /// The scope a save/reset/export/import targets.
    ///
    /// In role mode the role argument is mandatory and must name a
    /// configurable role; both checks run before any write.
    async fn write_scope(
        &self,
        settings: &PluginSettings,
        viewer: &Viewer,
        role: Option<&str>,
    ) -> KernelResult<ScopeKey> {
        match settings.apply_to {
            ApplyTo::All => Ok(ScopeKey::Global),
            ApplyTo::User => Ok(ScopeKey::User(viewer.id)),
            ApplyTo::Role => {
                let Some(slug) = role else {
                    return Err(KernelError::Validation(
                        "role-scoped operation requires a role".to_string(),
                    ));
                };
                let roles = self.roles.list_roles().await?;
                if !configurable_roles(&roles)
                    .iter()
                    .any(|candidate| candidate.slug == slug)
                {
                    return Err(KernelError::UnknownRole(slug.to_string()));
                }
                Ok(ScopeKey::Role(slug.to_string()))
            }
        }
    }
}
