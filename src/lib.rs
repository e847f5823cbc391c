//! LinkStash — a personal bookmark manager core.
//!
//! Users save URLs, the system opportunistically enriches them with page
//! metadata, organizes them into categories, and keeps a denormalized
//! per-category link count consistent after every mutation. State lives in a
//! reactive in-memory store persisted to a single JSON file; metadata
//! enrichment races user edits and discards stale results.

pub mod app;
pub mod services;
pub mod storage;
pub mod store;
pub mod types;
