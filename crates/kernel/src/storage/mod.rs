//! Persistence store abstraction and the scope-keyed config adapter.
//!
//! All engine reads and writes go through [`ConfigStore`], a typed adapter
//! over the host's [`KeyValueStore`]. Swapping the storage backend never
//! touches call sites.
//!
//! # Key scheme
//!
//! - `menu_settings` — the global [`PluginSettings`] document.
//! - `menu_layout_global` — the global layout document.
//! - `menu_layout_role_<slug>` — one layout document per role.
//! - `menu_layout_user_<uuid>` — one layout document per user.
//!
//! Uninstall cleanup deletes `menu_settings` plus everything under the
//! `menu_layout` prefix.

mod memory;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

pub use memory::MemoryStore;

use crate::config::{ConfigDocument, PluginSettings};
use crate::scope::ScopeKey;

/// Storage key for the global settings document.
pub const SETTINGS_KEY: &str = "menu_settings";

/// Common prefix of every scope-keyed layout document.
pub const LAYOUT_KEY_PREFIX: &str = "menu_layout";

/// Storage key for a scope's layout document.
pub fn layout_key(scope: &ScopeKey) -> String {
    match scope {
        ScopeKey::Global => format!("{LAYOUT_KEY_PREFIX}_global"),
        ScopeKey::Role(slug) => format!("{LAYOUT_KEY_PREFIX}_role_{slug}"),
        ScopeKey::User(id) => format!("{LAYOUT_KEY_PREFIX}_user_{id}"),
    }
}

/// The host's key/value persistence store.
///
/// Values are JSON documents. Single-key writes are assumed atomic; the
/// engine adds no locking of its own, and competing saves to the same key
/// are last-write-wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a document. `None` when the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Write a document (insert or replace).
    async fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Delete a document. `true` when something was deleted.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Keys starting with `prefix`, in unspecified order.
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;
}

/// Typed adapter over [`KeyValueStore`] for the engine's documents.
///
/// Reads degrade: a stored document that no longer parses is treated as
/// absent (with a warning) rather than failing the render.
#[derive(Clone)]
pub struct ConfigStore {
    store: Arc<dyn KeyValueStore>,
}

impl ConfigStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load a scope's layout document, `None` when the scope has no saved
    /// customization.
    pub async fn load_layout(&self, scope: &ScopeKey) -> Result<Option<ConfigDocument>> {
        let key = layout_key(scope);
        let Some(value) = self.store.get(&key).await? else {
            return Ok(None);
        };

        match serde_json::from_value(value) {
            Ok(doc) => Ok(Some(doc)),
            Err(error) => {
                warn!(%key, %error, "stored layout document is malformed, treating as absent");
                Ok(None)
            }
        }
    }

    /// Write a scope's layout document.
    pub async fn save_layout(&self, scope: &ScopeKey, doc: &ConfigDocument) -> Result<()> {
        let value = serde_json::to_value(doc)?;
        self.store.set(&layout_key(scope), value).await
    }

    /// Delete a scope's layout document. `true` when one existed.
    pub async fn delete_layout(&self, scope: &ScopeKey) -> Result<bool> {
        self.store.delete(&layout_key(scope)).await
    }

    /// Load the global settings, defaulting when absent or malformed.
    pub async fn load_settings(&self) -> Result<PluginSettings> {
        let Some(value) = self.store.get(SETTINGS_KEY).await? else {
            return Ok(PluginSettings::default());
        };

        match serde_json::from_value(value) {
            Ok(settings) => Ok(settings),
            Err(error) => {
                warn!(%error, "stored settings document is malformed, using defaults");
                Ok(PluginSettings::default())
            }
        }
    }

    /// Write the global settings.
    pub async fn save_settings(&self, settings: &PluginSettings) -> Result<()> {
        let value = serde_json::to_value(settings)?;
        self.store.set(SETTINGS_KEY, value).await
    }

    /// Delete every engine document: the settings and all layout scopes.
    /// Returns how many documents were removed.
    pub async fn purge(&self) -> Result<usize> {
        let mut deleted = 0;

        for key in self.store.keys_with_prefix(LAYOUT_KEY_PREFIX).await? {
            if self.store.delete(&key).await? {
                deleted += 1;
            }
        }
        if self.store.delete(SETTINGS_KEY).await? {
            deleted += 1;
        }

        Ok(deleted)
    }
}
