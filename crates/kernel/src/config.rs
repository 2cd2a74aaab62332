//! Persisted configuration documents.
//!
//! Two document shapes exist: one [`ConfigDocument`] per scope holding the
//! saved layout, and a single global [`PluginSettings`] selecting which
//! scope applies. Both are stored as JSON through the
//! [`storage`](crate::storage) adapter and carry `#[serde(default)]` on
//! every field so older or partial documents keep loading.

use serde::{Deserialize, Serialize};

/// Which scope saved layouts apply to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyTo {
    /// One global layout shared by every viewer.
    #[default]
    All,
    /// One layout per viewer.
    User,
    /// One layout per primary role.
    Role,
}

impl ApplyTo {
    /// Wire form of the mode (`"all"`, `"user"`, `"role"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::User => "user",
            Self::Role => "role",
        }
    }

    /// Parse a wire value, treating anything unrecognized as [`ApplyTo::All`].
    ///
    /// Imported documents may carry arbitrary strings; an unknown mode must
    /// not reject the import.
    pub fn from_lossy(value: &str) -> Self {
        match value {
            "user" => Self::User,
            "role" => Self::Role,
            _ => Self::All,
        }
    }
}

/// Global plugin settings document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSettings {
    /// Active scoping mode.
    #[serde(default)]
    pub apply_to: ApplyTo,

    /// Whether the host's own "collapse menu" toggle should be hidden.
    #[serde(default)]
    pub hide_collapse_toggle: bool,
}

/// One scope's saved menu layout.
///
/// `order` is the desired display order (duplicates tolerated, first
/// occurrence wins at reconciliation). `hidden` is the hidden set, stored
/// as a list. Either may reference slugs that no longer exist in the host
/// menu; stale references stay inert until the next explicit save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub order: Vec<String>,

    #[serde(default)]
    pub hidden: Vec<String>,
}

impl ConfigDocument {
    /// True when the document customizes nothing.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty() && self.hidden.is_empty()
    }
}

/// Scrub a caller-supplied slug list before it is persisted: trim
/// whitespace and drop entries left empty. Duplicates are kept — the
/// reconciler resolves them by first occurrence.
pub fn sanitize_slugs<I, S>(slugs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    slugs
        .into_iter()
        .filter_map(|slug| {
            let slug = slug.as_ref().trim();
            (!slug.is_empty()).then(|| slug.to_string())
        })
        .collect()
}
