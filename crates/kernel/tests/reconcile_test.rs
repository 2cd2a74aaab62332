#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Reconciliation properties over the fixture menu.

mod common;

use common::{build_service, item, sample_entries};

use ordina_kernel::config::ConfigDocument;
use ordina_kernel::menu::{collapsed_separators, reconcile};

fn doc(order: &[&str], hidden: &[&str]) -> ConfigDocument {
    ConfigDocument {
        order: order.iter().map(ToString::to_string).collect(),
        hidden: hidden.iter().map(ToString::to_string).collect(),
    }
}

fn slugs(resolved: &[ordina_kernel::menu::ResolvedEntry]) -> Vec<String> {
    resolved.iter().map(|r| r.entry.slug.clone()).collect()
}

#[test]
fn unmentioned_entries_keep_host_position_order() {
    let resolved = reconcile(&sample_entries(), &doc(&["options", "media"], &[]), false);

    assert_eq!(
        slugs(&resolved),
        vec![
            "options",
            "media",
            "dashboard",
            "separator1",
            "posts",
            "separator2"
        ]
    );
}

#[test]
fn saved_order_wins_over_host_positions() {
    let host = vec![item("itemA", "A", "", 1), item("itemB", "B", "", 2), item("itemC", "C", "", 3)];
    let resolved = reconcile(&host, &doc(&["itemB", "itemA"], &[]), false);

    assert_eq!(slugs(&resolved), vec!["itemB", "itemA", "itemC"]);
}

#[test]
fn stale_reference_is_excluded_without_error() {
    let resolved = reconcile(&sample_entries(), &doc(&["itemZ", "posts"], &[]), false);

    assert!(!slugs(&resolved).contains(&"itemZ".to_string()));
    assert_eq!(slugs(&resolved)[0], "posts");
}

#[test]
fn reconciled_output_is_a_fixed_point() {
    let cfg = doc(&["options", "separator3", "dashboard"], &["media"]);
    let first = reconcile(&sample_entries(), &cfg, false);

    let replay = ConfigDocument {
        order: slugs(&first),
        hidden: cfg.hidden.clone(),
    };
    let second = reconcile(&sample_entries(), &replay, false);

    assert_eq!(slugs(&first), slugs(&second));
}

#[test]
fn every_manageable_slug_appears_exactly_once() {
    let cfg = doc(&["media", "media", "ghost", "separator3"], &[]);
    let resolved = reconcile(&sample_entries(), &cfg, false);

    let mut seen = slugs(&resolved);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), resolved.len());

    // Every manageable host slug survived; the slug-less entry did not.
    for entry in sample_entries() {
        let present = resolved.iter().any(|r| r.entry.slug == entry.slug);
        assert_eq!(present, entry.is_manageable());
    }
}

#[test]
fn hidden_set_does_not_affect_ordering() {
    let without = reconcile(&sample_entries(), &doc(&["media"], &[]), false);
    let with = reconcile(
        &sample_entries(),
        &doc(&["media"], &["dashboard", "posts", "options"]),
        false,
    );

    assert_eq!(slugs(&without), slugs(&with));
}

#[test]
fn show_all_overrides_every_hidden_flag() {
    let cfg = doc(&[], &["dashboard", "posts", "media", "options"]);
    let resolved = reconcile(&sample_entries(), &cfg, true);

    assert!(resolved.iter().all(|r| !r.hidden));
}

#[tokio::test]
async fn empty_separator_derivation_through_the_service() {
    let (service, _) = build_service();
    let viewer = common::admin_viewer();

    service
        .save_all(
            &viewer,
            vec![
                "separator3".to_string(),
                "posts".to_string(),
                "separator4".to_string(),
                "media".to_string(),
            ],
            vec!["posts".to_string()],
            None,
        )
        .await
        .unwrap();

    let resolved = service.resolved_menu(&viewer, false).await.unwrap();
    let collapsed = collapsed_separators(&resolved);

    // No visible item sits between separator3 and separator4; media keeps
    // separator4 open.
    assert!(collapsed.contains("separator3"));
    assert!(!collapsed.contains("separator4"));
}
