//! Reactive link/category store for LinkStash.
//!
//! Single source of truth for link and category state. Every mutation runs
//! the total `link_count` recompute, schedules a best-effort persist of the
//! new snapshot, and then notifies observers synchronously. Persistence is
//! fire-and-forget: callers never wait on disk I/O and never see its outcome.

use tokio::sync::watch;

use crate::storage::file_store::FileStoreTrait;
use crate::types::category::Category;
use crate::types::link::Link;
use crate::types::snapshot::Snapshot;

/// Callback invoked with the new snapshot after each mutation.
pub type Observer = Box<dyn Fn(&Snapshot) + Send>;

/// Trait defining the store's mutation and observation interface.
///
/// All mutations are synchronous on the in-memory state and must be
/// serialized by the caller (one `&mut self` owner, or a mutex around the
/// store in a multithreaded setting). Unknown mutation targets are silent
/// no-ops: a concurrent delete from another flow is expected, not an error.
pub trait LinkStoreTrait {
    fn add_link(&mut self, link: Link);
    fn update_link(&mut self, link: Link);
    fn delete_link(&mut self, link_id: &str);
    fn toggle_favorite(&mut self, link_id: &str);
    fn mark_read(&mut self, link_id: &str);
    fn add_category(&mut self, category: Category);
    fn update_category(&mut self, category: Category);
    fn delete_category(&mut self, category_id: &str);
    fn snapshot(&self) -> Snapshot;
    fn subscribe(&mut self, observer: Observer);
}

/// In-memory store holding the authoritative collections.
///
/// The store exclusively owns both collections; consumers hold read-only
/// snapshots plus a handle for calling mutations. New snapshots flow out two
/// ways: synchronously to observers, and through a `watch` channel to the
/// background persistence loop (the channel keeps only the latest value, so
/// bursts of mutations coalesce into one pending write).
pub struct LinkStore {
    links: Vec<Link>,
    categories: Vec<Category>,
    observers: Vec<Observer>,
    persist_tx: watch::Sender<Snapshot>,
}

impl LinkStore {
    /// Creates a store from an initial snapshot without touching disk.
    ///
    /// Counts are recomputed immediately so a snapshot with stale or
    /// caller-supplied `link_count` values is normalized on entry.
    pub fn from_snapshot(snapshot: Snapshot, persist_tx: watch::Sender<Snapshot>) -> Self {
        let mut store = Self {
            links: snapshot.links,
            categories: snapshot.categories,
            observers: Vec::new(),
            persist_tx,
        };
        store.recount();
        store
    }

    /// Opens the store from persisted state, seeding the sample dataset when
    /// nothing loadable exists.
    ///
    /// A freshly seeded store schedules a persist right away so a new
    /// install always has a non-empty saved starting state.
    pub fn open(
        storage: &crate::storage::file_store::FileStore,
        persist_tx: watch::Sender<Snapshot>,
    ) -> Self {
        let (snapshot, seeded) = match storage.load() {
            Some(snapshot) => (snapshot, false),
            None => (crate::storage::seed::sample_snapshot(), true),
        };
        let mut store = Self::from_snapshot(snapshot, persist_tx);
        if seeded {
            store.schedule_persist();
        }
        store
    }

    fn find_link_index(&self, link_id: &str) -> Option<usize> {
        self.links.iter().position(|l| l.id == link_id)
    }

    /// Total recompute of every category's `link_count`. Always recomputes
    /// all categories rather than adjusting incrementally, so the cached
    /// aggregate cannot drift.
    fn recount(&mut self) {
        for category in &mut self.categories {
            category.link_count = self
                .links
                .iter()
                .filter(|l| l.category_id.as_deref() == Some(category.id.as_str()))
                .count() as i64;
        }
    }

    fn current_snapshot(&self) -> Snapshot {
        Snapshot {
            links: self.links.clone(),
            categories: self.categories.clone(),
        }
    }

    /// Pushes the latest snapshot to the persistence loop. `send_replace`
    /// overwrites any not-yet-written snapshot: only convergence to the
    /// final state matters, not every intermediate write.
    fn schedule_persist(&self) {
        let _ = self.persist_tx.send_replace(self.current_snapshot());
    }

    fn notify(&self) {
        let snapshot = self.current_snapshot();
        for observer in &self.observers {
            observer(&snapshot);
        }
    }

    /// Recount, schedule persist, notify — in that order, after every mutation.
    fn after_mutation(&mut self) {
        self.recount();
        self.schedule_persist();
        self.notify();
    }
}

impl LinkStoreTrait for LinkStore {
    /// Appends a new link. Trusts the caller to generate unique ids
    /// (v4 UUIDs); duplicates are not checked here.
    fn add_link(&mut self, link: Link) {
        self.links.push(link);
        self.after_mutation();
    }

    /// Replaces the link with a matching id. No-op when absent; never inserts.
    fn update_link(&mut self, link: Link) {
        if let Some(index) = self.find_link_index(&link.id) {
            self.links[index] = link;
        }
        self.after_mutation();
    }

    /// Removes the link with the given id. No-op when absent.
    fn delete_link(&mut self, link_id: &str) {
        self.links.retain(|l| l.id != link_id);
        self.after_mutation();
    }

    /// Flips the favorite flag on the matching link. No-op when absent.
    fn toggle_favorite(&mut self, link_id: &str) {
        if let Some(index) = self.find_link_index(link_id) {
            self.links[index].is_favorite = !self.links[index].is_favorite;
        }
        self.after_mutation();
    }

    /// Marks the matching link as read. No-op when absent.
    fn mark_read(&mut self, link_id: &str) {
        if let Some(index) = self.find_link_index(link_id) {
            self.links[index].is_read = true;
        }
        self.after_mutation();
    }

    /// Appends a new category. The supplied `link_count` is irrelevant; the
    /// recount overwrites it immediately.
    fn add_category(&mut self, category: Category) {
        self.categories.push(category);
        self.after_mutation();
    }

    /// Replaces the category with a matching id. No-op when absent.
    fn update_category(&mut self, category: Category) {
        if let Some(index) = self.categories.iter().position(|c| c.id == category.id) {
            self.categories[index] = category;
        }
        self.after_mutation();
    }

    /// Removes a category. Links pointing at it are orphaned (`category_id`
    /// set to `None`) before the recount — deletion never cascades to links.
    fn delete_category(&mut self, category_id: &str) {
        self.categories.retain(|c| c.id != category_id);
        for link in &mut self.links {
            if link.category_id.as_deref() == Some(category_id) {
                link.category_id = None;
            }
        }
        self.after_mutation();
    }

    fn snapshot(&self) -> Snapshot {
        self.current_snapshot()
    }

    /// Registers an observer. It is invoked immediately with the current
    /// snapshot, then synchronously after every subsequent mutation.
    fn subscribe(&mut self, observer: Observer) {
        let snapshot = self.current_snapshot();
        observer(&snapshot);
        self.observers.push(observer);
    }
}
