//! Enrichment pipeline for LinkStash.
//!
//! Orchestrates metadata fetches for an in-progress edit draft and applies
//! results without clobbering concurrent user input or stale fetches. Each
//! URL change bumps a generation counter; a fetch result is applied only if
//! its captured generation still matches the session's current one at
//! resolution time, so late results for superseded URLs are discarded.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::services::metadata_fetcher::FetchMetadata;
use crate::store::LinkStoreTrait;
use crate::types::draft::EditDraft;
use crate::types::link::{now_millis, Link};
use crate::types::metadata::LinkMetadata;

/// Enrichment state of an edit session.
///
/// `Idle → Fetching → Applied` for the happy path; a superseded fetch ends
/// in `StaleDiscarded` instead. A failed fetch for the current URL returns
/// the session to `Idle` with the draft untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentState {
    Idle,
    Fetching,
    Applied,
    StaleDiscarded,
}

/// Per-add/edit-flow enrichment state: the draft plus the generation token
/// guarding against stale fetch results.
pub struct EnrichmentSession {
    draft: EditDraft,
    generation: u64,
    state: EnrichmentState,
}

impl EnrichmentSession {
    /// Starts a session for adding a new link.
    pub fn new() -> Self {
        Self {
            draft: EditDraft::default(),
            generation: 0,
            state: EnrichmentState::Idle,
        }
    }

    /// Starts a session for editing an existing link.
    ///
    /// The draft is seeded directly from the stored fields; enrichment is
    /// bypassed entirely (no fetch is triggered).
    pub fn for_link(link: &Link) -> Self {
        Self {
            draft: EditDraft::from_link(link),
            generation: 0,
            state: EnrichmentState::Idle,
        }
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    pub fn state(&self) -> EnrichmentState {
        self.state
    }

    /// Records a URL edit and arms a fetch for it.
    ///
    /// Every call bumps the generation so any in-flight fetch for the
    /// previous value becomes stale. Returns the token the fetch result must
    /// present to `apply_metadata`, or `None` for blank input (no fetch).
    pub fn set_url(&mut self, url: &str) -> Option<u64> {
        self.draft.url = url.to_string();
        self.generation += 1;
        if url.trim().is_empty() {
            self.state = EnrichmentState::Idle;
            None
        } else {
            self.state = EnrichmentState::Fetching;
            Some(self.generation)
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.to_string();
    }

    pub fn select_category(&mut self, category_id: Option<&str>) {
        self.draft.selected_category_id = category_id.map(str::to_string);
    }

    pub fn set_favorite(&mut self, is_favorite: bool) {
        self.draft.is_favorite = is_favorite;
    }

    /// Applies a resolved fetch to the draft. Returns whether it was applied.
    ///
    /// A result whose generation no longer matches is discarded outright.
    /// For a current-generation result, title and description fill only
    /// fields the user has left empty; the image is always accepted since
    /// there is no user-facing image field to protect.
    pub fn apply_metadata(&mut self, generation: u64, result: Option<LinkMetadata>) -> bool {
        if generation != self.generation {
            // Keep Fetching if a newer fetch is still pending for the
            // current URL; otherwise record the discard.
            if self.state != EnrichmentState::Fetching {
                self.state = EnrichmentState::StaleDiscarded;
            }
            return false;
        }

        let Some(metadata) = result else {
            self.state = EnrichmentState::Idle;
            return false;
        };

        if self.draft.title.trim().is_empty() {
            if let Some(title) = metadata.title {
                self.draft.title = title;
            }
        }
        if self.draft.description.trim().is_empty() {
            if let Some(description) = metadata.description {
                self.draft.description = description;
            }
        }
        if let Some(image_url) = metadata.image_url {
            self.draft.image_url = Some(image_url);
        }

        self.state = EnrichmentState::Applied;
        true
    }

    /// Converts the draft into a store mutation.
    ///
    /// Editing replaces the target link in place, preserving its read flag,
    /// timestamp, and stored image when the draft has none. If the target
    /// was deleted by a concurrent flow, this is a silent no-op. Adding
    /// creates a fresh link with a new v4 UUID and the current time.
    pub fn commit<S: LinkStoreTrait>(&self, store: &mut S) {
        let draft = &self.draft;
        match &draft.target_link_id {
            Some(target_id) => {
                let snapshot = store.snapshot();
                let Some(existing) = snapshot.links.iter().find(|l| &l.id == target_id) else {
                    return;
                };
                store.update_link(Link {
                    id: existing.id.clone(),
                    url: draft.url.clone(),
                    title: non_blank(&draft.title),
                    description: non_blank(&draft.description),
                    image_url: draft.image_url.clone().or_else(|| existing.image_url.clone()),
                    category_id: draft.selected_category_id.clone(),
                    is_favorite: draft.is_favorite,
                    is_read: existing.is_read,
                    timestamp: existing.timestamp,
                });
            }
            None => {
                store.add_link(Link {
                    id: Uuid::new_v4().to_string(),
                    url: draft.url.clone(),
                    title: non_blank(&draft.title),
                    description: non_blank(&draft.description),
                    image_url: draft.image_url.clone(),
                    category_id: draft.selected_category_id.clone(),
                    is_favorite: draft.is_favorite,
                    is_read: false,
                    timestamp: now_millis(),
                });
            }
        }
    }
}

impl Default for EnrichmentSession {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Glue between an edit session and a metadata fetcher.
///
/// Spawns one fetch task per URL change and routes the result, tagged with
/// its generation, back through `apply_metadata`. No true cancellation:
/// superseded fetches run to completion and are discarded on arrival.
pub struct EnrichmentCoordinator<F> {
    session: Arc<Mutex<EnrichmentSession>>,
    fetcher: Arc<F>,
}

impl<F: FetchMetadata + 'static> EnrichmentCoordinator<F> {
    /// Coordinator for an add flow.
    pub fn new(fetcher: Arc<F>) -> Self {
        Self {
            session: Arc::new(Mutex::new(EnrichmentSession::new())),
            fetcher,
        }
    }

    /// Coordinator for an edit flow; no fetch is triggered for the seeded URL.
    pub fn for_link(fetcher: Arc<F>, link: &Link) -> Self {
        Self {
            session: Arc::new(Mutex::new(EnrichmentSession::for_link(link))),
            fetcher,
        }
    }

    /// Shared handle to the session for draft edits and commit.
    pub fn session(&self) -> Arc<Mutex<EnrichmentSession>> {
        Arc::clone(&self.session)
    }

    /// Handles a URL edit: arms the session and spawns the fetch.
    ///
    /// Returns the fetch task handle so tests can await resolution;
    /// production callers may drop it. `None` means no fetch was started
    /// (blank URL, or a poisoned session lock).
    pub fn url_changed(&self, url: &str) -> Option<JoinHandle<()>> {
        let generation = match self.session.lock() {
            Ok(mut session) => session.set_url(url),
            Err(e) => {
                log::warn!("enrichment session lock poisoned: {}", e);
                return None;
            }
        }?;

        let session = Arc::clone(&self.session);
        let fetcher = Arc::clone(&self.fetcher);
        let url = url.to_string();
        Some(tokio::spawn(async move {
            let result = fetcher.fetch(&url).await;
            match session.lock() {
                Ok(mut session) => {
                    session.apply_metadata(generation, result);
                }
                Err(e) => log::warn!("enrichment session lock poisoned: {}", e),
            }
        }))
    }
}
