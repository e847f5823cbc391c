//! LinkStash — a personal bookmark manager core.
//!
//! Entry point: runs a console walkthrough of the core components against a
//! temporary data file. The real UI layer consumes the library crate.

use std::sync::{Arc, Mutex};

use linkstash::app::App;
use linkstash::services::enrichment::EnrichmentSession;
use linkstash::services::metadata_fetcher::extract_metadata;
use linkstash::storage::file_store::{FileStore, FileStoreTrait};
use linkstash::storage::run_persist_loop;
use linkstash::store::{LinkStore, LinkStoreTrait};
use linkstash::types::category::Category;
use linkstash::types::snapshot::Snapshot;
use tokio::sync::watch;
use uuid::Uuid;

#[tokio::main]
async fn main() {
    println!();
    println!("  LinkStash v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!("  Reactive link/category store with metadata enrichment");
    println!();

    let data_path = std::env::temp_dir().join("linkstash-demo").join("links_data.json");
    let _ = std::fs::remove_file(&data_path);
    let storage = FileStore::new(Some(data_path));

    demo_store(&storage).await;
    demo_enrichment();
    demo_app().await;

    println!();
    println!("  Demo data file: {}", storage.data_path().display());
    println!();
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────");
}

async fn demo_store(storage: &FileStore) {
    section("Store + persistence");

    let (persist_tx, persist_rx) = watch::channel(Snapshot::default());
    let persist_task = tokio::spawn(run_persist_loop(storage.clone(), persist_rx));

    // Fresh file: the store seeds the sample dataset and schedules a persist
    let store = Arc::new(Mutex::new(LinkStore::open(storage, persist_tx)));
    {
        let mut store = store.lock().unwrap();
        let snapshot = store.snapshot();
        println!(
            "  Seeded {} links across {} categories",
            snapshot.links.len(),
            snapshot.categories.len()
        );

        store.subscribe(Box::new(|snapshot| {
            println!(
                "  [observer] {} links, {} categories",
                snapshot.links.len(),
                snapshot.categories.len()
            );
        }));

        let work = Category {
            id: Uuid::new_v4().to_string(),
            name: "Conference Talks".to_string(),
            icon_res_id: None,
            link_count: 0,
        };
        let work_id = work.id.clone();
        store.add_category(work);

        let mut session = EnrichmentSession::new();
        let _ = session.set_url("https://www.rust-lang.org");
        session.set_title("Rust");
        session.select_category(Some(&work_id));
        session.commit(&mut *store);

        let snapshot = store.snapshot();
        let count = snapshot
            .categories
            .iter()
            .find(|c| c.id == work_id)
            .map(|c| c.link_count)
            .unwrap_or(0);
        println!("  'Conference Talks' now counts {} link(s)", count);

        // Deleting the category orphans the link instead of deleting it
        store.delete_category(&work_id);
        let snapshot = store.snapshot();
        let orphaned = snapshot
            .links
            .iter()
            .filter(|l| l.category_id.is_none())
            .count();
        println!("  After category delete: {} uncategorized link(s)", orphaned);
    }

    // Dropping the store closes the persist channel; the loop drains the
    // final snapshot before exiting.
    drop(store);
    let _ = persist_task.await;
    match storage.load() {
        Some(snapshot) => println!("  Persisted snapshot holds {} links", snapshot.links.len()),
        None => println!("  Persisted snapshot missing (unexpected)"),
    }
}

fn demo_enrichment() {
    section("Enrichment: stale-fetch discard");

    let html = r#"
        <html><head>
          <title>Fallback Title</title>
          <meta property="og:title" content="Rust Programming Language">
          <meta property="og:description" content="Reliable and efficient software.">
          <link rel="icon" href="/favicon.svg">
        </head><body></body></html>
    "#;
    let metadata = extract_metadata(html);
    println!("  Extracted title: {:?}", metadata.title);

    let mut session = EnrichmentSession::new();
    let first = session.set_url("https://old.example.com").unwrap();
    let second = session.set_url("https://new.example.com").unwrap();

    // The first URL's result arrives late and must not touch the draft
    let applied = session.apply_metadata(first, Some(metadata.clone()));
    println!("  Late result for superseded URL applied: {}", applied);

    let applied = session.apply_metadata(second, Some(metadata));
    println!(
        "  Current result applied: {} (draft title: {:?})",
        applied,
        session.draft().title
    );
}

async fn demo_app() {
    section("App core: edit flow");

    let data_path = std::env::temp_dir().join("linkstash-demo").join("app_data.json");
    let _ = std::fs::remove_file(&data_path);
    let app = App::new(Some(data_path));

    let first_link_id = {
        let store = app.store();
        let store = store.lock().unwrap();
        store.snapshot().links[0].id.clone()
    };

    // Editing seeds the draft from stored fields; no fetch fires
    let coordinator = app.begin_edit(&first_link_id).expect("seeded link exists");
    let session = coordinator.session();
    let session = session.lock().unwrap();
    println!(
        "  Editing {:?} (enrichment state: {:?})",
        session.draft().title,
        session.state()
    );
}
