//! Menu entry types and host title normalization.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Notification-count badges: a `<span>` block with an optional preceding
/// space or non-breaking space (e.g. `Comments <span>5</span>`).
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static BADGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)[\s\u{00A0}]?<span[^>]*>.*?</span>").expect("valid regex literal"));

/// Line breaks inside menu titles become plain spaces.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static BR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex literal"));

/// Any remaining markup tag.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex literal"));

/// A host-supplied menu entry.
///
/// Rebuilt by the host every render cycle, never persisted. An empty `slug`
/// marks the entry unmanageable: it cannot be ordered or hidden and is
/// excluded from reconciliation entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Unique identifier within the menu.
    pub slug: String,

    /// Display text. May arrive with markup; see [`strip_title`].
    #[serde(default)]
    pub title: String,

    /// Opaque icon reference: class name, data-URI, or empty.
    #[serde(default)]
    pub icon: String,

    /// Permission required to see the entry (empty = everyone). Used only
    /// for role-scoped filtering.
    #[serde(default)]
    pub required_permission: String,

    #[serde(default)]
    pub is_separator: bool,

    /// Host-native position, used as the ordering tiebreak for entries the
    /// saved order does not mention.
    #[serde(default)]
    pub position: i64,
}

impl MenuEntry {
    /// A bare separator entry.
    pub fn separator(slug: impl Into<String>, position: i64) -> Self {
        Self {
            slug: slug.into(),
            title: String::new(),
            icon: String::new(),
            required_permission: String::new(),
            is_separator: true,
            position,
        }
    }

    /// Whether the entry can participate in ordering and hiding.
    pub fn is_manageable(&self) -> bool {
        !self.slug.is_empty()
    }
}

/// A reconciled entry: the host entry plus its resolved visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    #[serde(flatten)]
    pub entry: MenuEntry,

    /// Hidden by the active configuration (always false under show-all,
    /// and always false for separators).
    pub hidden: bool,
}

/// Normalize a host-supplied menu title for display: drop notification
/// badges, turn `<br>` into a space, strip remaining tags, trim.
pub fn strip_title(raw: &str) -> String {
    let title = BADGE_RE.replace_all(raw, "");
    let title = BR_RE.replace_all(&title, " ");
    let title = TAG_RE.replace_all(&title, "");
    title.trim().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn strip_title_removes_notification_badge() {
        assert_eq!(
            strip_title("Comments <span class=\"awaiting-mod\">5</span>"),
            "Comments"
        );
    }

    #[test]
    fn strip_title_removes_nbsp_before_badge() {
        assert_eq!(strip_title("Updates\u{00A0}<span>3</span>"), "Updates");
    }

    #[test]
    fn strip_title_converts_line_breaks() {
        assert_eq!(strip_title("Site<br/>Options"), "Site Options");
        assert_eq!(strip_title("Site<BR>Options"), "Site Options");
    }

    #[test]
    fn strip_title_strips_remaining_markup() {
        assert_eq!(strip_title("<strong>Media</strong>"), "Media");
    }

    #[test]
    fn strip_title_plain_text_untouched() {
        assert_eq!(strip_title("  Dashboard "), "Dashboard");
    }

    #[test]
    fn empty_slug_is_unmanageable() {
        let entry = MenuEntry {
            slug: String::new(),
            title: "Orphan".to_string(),
            icon: String::new(),
            required_permission: String::new(),
            is_separator: false,
            position: 10,
        };
        assert!(!entry.is_manageable());
        assert!(MenuEntry::separator("separator1", 4).is_manageable());
    }
}
