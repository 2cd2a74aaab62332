//! Synthetic separator planning.
//!
//! The host ships `separator1` and `separator2` natively; any higher index
//! referenced by a saved order was created by an administrator and exists
//! only in configuration. Those entries are synthesized into the working
//! set each render — ephemeral, never written back to the host — at
//! positions that cannot collide with host-native ones.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::MenuEntry;

/// Separators the host provides natively (`separator1`, `separator2`).
pub const NATIVE_SEPARATOR_COUNT: u32 = 2;

/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^separator([0-9]+)$").expect("valid regex literal"));

/// Parse a `separator<N>` slug into its index.
///
/// An index that does not fit `u32` is not treated as a separator; the slug
/// then behaves like any other (stale) reference.
pub fn separator_index(slug: &str) -> Option<u32> {
    SEPARATOR_RE
        .captures(slug)
        .and_then(|captures| captures[1].parse().ok())
}

/// Plans placement for separators a saved order references but the current
/// entry set lacks.
///
/// Positions start strictly above the highest existing position and
/// increase in the order slugs are first encountered, so synthesized
/// entries never disturb host-native placement and the plan is
/// deterministic.
pub struct SeparatorAllocator {
    known: HashSet<String>,
    next_position: i64,
}

impl SeparatorAllocator {
    /// Seed the allocator with the current (manageable) entry set.
    pub fn new(entries: &[MenuEntry]) -> Self {
        let known = entries.iter().map(|entry| entry.slug.clone()).collect();
        let next_position = entries
            .iter()
            .map(|entry| entry.position)
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            known,
            next_position,
        }
    }

    /// Synthetic entries for every user-created separator in `order` that
    /// is missing from the seeded set. Duplicate references yield one
    /// entry; native indexes are never synthesized.
    pub fn plan(mut self, order: &[String]) -> Vec<MenuEntry> {
        let mut synthesized = Vec::new();

        for slug in order {
            if self.known.contains(slug) {
                continue;
            }
            match separator_index(slug) {
                Some(index) if index > NATIVE_SEPARATOR_COUNT => {
                    synthesized.push(MenuEntry::separator(slug.clone(), self.next_position));
                    self.known.insert(slug.clone());
                    self.next_position += 1;
                }
                _ => {}
            }
        }

        synthesized
    }
}
