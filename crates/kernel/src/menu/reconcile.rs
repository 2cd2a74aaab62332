//! Menu reconciliation: merge a saved layout with the live host menu.
//!
//! [`reconcile`] is a pure function over an immutable input sequence — it
//! never mutates host state and never fails. Saved configuration that no
//! longer matches the live menu (stale slugs, duplicates, unknown
//! separators) is inert: a corrupt layout can degrade to the host default,
//! but it can never break rendering.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::ConfigDocument;

use super::{MenuEntry, ResolvedEntry, SeparatorAllocator};

/// Produce the final ordered, visibility-annotated menu.
///
/// Entries named by `config.order` come first, in saved order (first
/// occurrence wins); everything else follows in host position order, so a
/// newly-installed menu item always appears instead of silently vanishing.
/// `config.hidden` marks entries hidden unless `show_all` overrides it;
/// separators are never individually hidden.
pub fn reconcile(
    host_entries: &[MenuEntry],
    config: &ConfigDocument,
    show_all: bool,
) -> Vec<ResolvedEntry> {
    // Working set: manageable host entries, first occurrence per slug.
    let mut pool: Vec<MenuEntry> = Vec::with_capacity(host_entries.len());
    let mut seen: HashSet<&str> = HashSet::new();
    for entry in host_entries {
        if !entry.is_manageable() {
            continue;
        }
        if !seen.insert(entry.slug.as_str()) {
            debug!(slug = %entry.slug, "duplicate host slug ignored");
            continue;
        }
        pool.push(entry.clone());
    }

    let synthesized = SeparatorAllocator::new(&pool).plan(&config.order);
    pool.extend(synthesized);

    let index: HashMap<&str, usize> = pool
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.slug.as_str(), i))
        .collect();
    let mut slots: Vec<Option<MenuEntry>> = pool.iter().cloned().map(Some).collect();

    let mut ordered: Vec<MenuEntry> = Vec::with_capacity(slots.len());
    for slug in &config.order {
        match index.get(slug.as_str()) {
            // An empty slot means an earlier occurrence already claimed it.
            Some(&i) => {
                if let Some(entry) = slots[i].take() {
                    ordered.push(entry);
                }
            }
            None => debug!(%slug, "stale slug in saved order ignored"),
        }
    }

    // Entries the saved order never mentioned, in host position order.
    let mut remainder: Vec<MenuEntry> = slots.into_iter().flatten().collect();
    remainder.sort_by_key(|entry| entry.position);
    ordered.extend(remainder);

    let hidden_set: HashSet<&str> = config.hidden.iter().map(String::as_str).collect();
    ordered
        .into_iter()
        .map(|entry| {
            let hidden =
                !show_all && !entry.is_separator && hidden_set.contains(entry.slug.as_str());
            ResolvedEntry { entry, hidden }
        })
        .collect()
}

/// Separator slugs that should render collapsed, derived from the resolved
/// list on every render and never persisted.
///
/// A separator is empty when it is the first entry of the list, or when no
/// visible non-separator entry appears between it and the next separator
/// (or the end of the list).
pub fn collapsed_separators(entries: &[ResolvedEntry]) -> HashSet<String> {
    let mut collapsed = HashSet::new();

    for (i, resolved) in entries.iter().enumerate() {
        if !resolved.entry.is_separator {
            continue;
        }
        if i == 0 {
            collapsed.insert(resolved.entry.slug.clone());
            continue;
        }

        let mut empty = true;
        for next in &entries[i + 1..] {
            if next.entry.is_separator {
                break;
            }
            if !next.hidden {
                empty = false;
                break;
            }
        }
        if empty {
            collapsed.insert(resolved.entry.slug.clone());
        }
    }

    collapsed
}
