//! Property-based round-trip tests for snapshot persistence.
//!
//! For any snapshot with non-empty required fields, `load(save(snapshot))`
//! must reproduce it exactly, including unicode text and optional fields.

use linkstash::storage::file_store::{FileStore, FileStoreTrait};
use linkstash::types::category::Category;
use linkstash::types::link::Link;
use linkstash::types::snapshot::Snapshot;
use proptest::prelude::*;

/// Strategy for id/url/name-ish strings: non-empty, printable, with some
/// unicode coverage.
fn arb_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9一-鿿 .:/_-]{1,24}").unwrap()
}

fn arb_optional_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(arb_text())
}

fn arb_link() -> impl Strategy<Value = Link> {
    (
        arb_text(),
        arb_text(),
        arb_optional_text(),
        arb_optional_text(),
        arb_optional_text(),
        arb_optional_text(),
        any::<bool>(),
        any::<bool>(),
        0i64..=4_102_444_800_000,
    )
        .prop_map(
            |(id, url, title, description, image_url, category_id, is_favorite, is_read, timestamp)| Link {
                id,
                url,
                title,
                description,
                image_url,
                category_id,
                is_favorite,
                is_read,
                timestamp,
            },
        )
}

fn arb_category() -> impl Strategy<Value = Category> {
    (
        arb_text(),
        arb_text(),
        proptest::option::of(0i32..10_000),
        0i64..1_000,
    )
        .prop_map(|(id, name, icon_res_id, link_count)| Category {
            id,
            name,
            icon_res_id,
            link_count,
        })
}

fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    (
        proptest::collection::vec(arb_link(), 0..8),
        proptest::collection::vec(arb_category(), 0..5),
    )
        .prop_map(|(links, categories)| Snapshot { links, categories })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// save-then-load reproduces the snapshot exactly.
    #[test]
    fn snapshot_roundtrip(snapshot in arb_snapshot()) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(Some(dir.path().join("links_data.json")));

        store.save(&snapshot).unwrap();
        let loaded = store.load().expect("saved snapshot should load");

        prop_assert_eq!(loaded, snapshot);
    }
}
