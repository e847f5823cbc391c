//! App Core for LinkStash.
//!
//! Central struct wiring the store, persistence loop, and metadata fetcher.
//! Constructed explicitly and passed by reference to consumers — there is no
//! global singleton repository.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use uuid::Uuid;

use crate::services::enrichment::EnrichmentCoordinator;
use crate::services::metadata_fetcher::MetadataFetcher;
use crate::storage::file_store::FileStore;
use crate::store::{LinkStore, LinkStoreTrait};
use crate::types::category::Category;
use crate::types::snapshot::Snapshot;

/// Central application struct.
///
/// Mutations are serialized behind the store mutex; reads go through cloned
/// snapshots, so consumers never hold the lock while rendering.
pub struct App {
    store: Arc<Mutex<LinkStore>>,
    fetcher: Arc<MetadataFetcher>,
}

impl App {
    /// Creates a new App, loading persisted state (or seeding) and spawning
    /// the background persistence loop.
    ///
    /// If `data_path_override` is `Some`, uses that path for the data file.
    /// Otherwise, uses the platform data directory. Must be called from
    /// within a tokio runtime.
    pub fn new(data_path_override: Option<PathBuf>) -> Self {
        let storage = FileStore::new(data_path_override);
        let (persist_tx, persist_rx) = watch::channel(Snapshot::default());
        let store = LinkStore::open(&storage, persist_tx);
        tokio::spawn(crate::storage::run_persist_loop(storage, persist_rx));

        Self {
            store: Arc::new(Mutex::new(store)),
            fetcher: Arc::new(MetadataFetcher::new()),
        }
    }

    /// Shared handle to the store for mutations and subscriptions.
    pub fn store(&self) -> Arc<Mutex<LinkStore>> {
        Arc::clone(&self.store)
    }

    /// Creates a category from user input, generating its id.
    ///
    /// Blank names are rejected with `None`; otherwise returns the new
    /// category's id.
    pub fn create_category(&self, name: &str) -> Option<String> {
        if name.trim().is_empty() {
            return None;
        }
        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            icon_res_id: None,
            link_count: 0,
        };
        let id = category.id.clone();
        match self.store.lock() {
            Ok(mut store) => {
                store.add_category(category);
                Some(id)
            }
            Err(e) => {
                log::warn!("store lock poisoned: {}", e);
                None
            }
        }
    }

    /// Starts an enrichment flow for adding a new link.
    pub fn begin_add(&self) -> EnrichmentCoordinator<MetadataFetcher> {
        EnrichmentCoordinator::new(Arc::clone(&self.fetcher))
    }

    /// Starts an edit flow for an existing link, seeding the draft from the
    /// stored fields without triggering a fetch. `None` when the link does
    /// not exist.
    pub fn begin_edit(&self, link_id: &str) -> Option<EnrichmentCoordinator<MetadataFetcher>> {
        let snapshot = match self.store.lock() {
            Ok(store) => store.snapshot(),
            Err(e) => {
                log::warn!("store lock poisoned: {}", e);
                return None;
            }
        };
        let link = snapshot.links.iter().find(|l| l.id == link_id)?;
        Some(EnrichmentCoordinator::for_link(
            Arc::clone(&self.fetcher),
            link,
        ))
    }
}
