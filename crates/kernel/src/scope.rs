//! Configuration scope resolution.
//!
//! Exactly one scope is active for a viewer at a time, selected by the
//! global [`ApplyTo`] mode. A second, independent path picks which role's
//! document the settings UI edits — the editing role is driven by an
//! explicit selector, not by the viewer's own roles.

use std::fmt;

use uuid::Uuid;

use crate::config::{ApplyTo, PluginSettings};
use crate::error::{KernelError, KernelResult};
use crate::models::role::standard_role_tabs;
use crate::models::{Role, Viewer};

/// The unit of configuration sharing a saved layout belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    /// One document for every viewer.
    Global,
    /// One document per viewer.
    User(Uuid),
    /// One document per role slug.
    Role(String),
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::User(id) => write!(f, "user:{id}"),
            Self::Role(slug) => write!(f, "role:{slug}"),
        }
    }
}

/// Resolve the scope whose document applies to `viewer`.
///
/// Fails only with [`KernelError::NoScope`], when role scoping is active
/// and the viewer holds no roles; the caller falls back to
/// [`ScopeKey::Global`] so reconciliation never runs with an undefined
/// scope.
pub fn resolve(settings: &PluginSettings, viewer: &Viewer) -> KernelResult<ScopeKey> {
    match settings.apply_to {
        ApplyTo::All => Ok(ScopeKey::Global),
        ApplyTo::User => Ok(ScopeKey::User(viewer.id)),
        ApplyTo::Role => primary_role(&viewer.roles)
            .map(|role| ScopeKey::Role(role.slug.clone()))
            .ok_or(KernelError::NoScope),
    }
}

/// The viewer's primary (highest-privilege) role.
///
/// A single role is primary by definition; among several, the one with the
/// most granted permissions wins. Ties break to the lexicographically
/// smallest slug — a deterministic rule where the original behavior
/// depended on incidental map ordering.
pub fn primary_role(roles: &[Role]) -> Option<&Role> {
    roles.iter().max_by(|a, b| {
        a.permission_count()
            .cmp(&b.permission_count())
            .then_with(|| b.slug.cmp(&a.slug))
    })
}

/// Pick the role whose document the settings UI edits.
///
/// A requested role is honored when it is a standard role with at least one
/// assigned user and admin access. Otherwise the default applies: the first
/// standard role, in canonical privilege order, meeting both conditions.
/// `None` disables role editing.
pub fn resolve_editing_role(requested: Option<&str>, roles: &[Role]) -> Option<String> {
    let tabs = standard_role_tabs(roles);

    if let Some(slug) = requested
        && tabs.iter().any(|tab| tab.slug == slug && tab.selectable())
    {
        return Some(slug.to_string());
    }

    tabs.into_iter()
        .find(|tab| tab.selectable())
        .map(|tab| tab.slug)
}
