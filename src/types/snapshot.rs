use serde::{Deserialize, Serialize};

use crate::types::category::Category;
use crate::types::link::Link;

/// An immutable point-in-time view of the store's links and categories.
///
/// Insertion order is preserved for display stability. This is also the
/// persisted document: a single JSON object with `links` and `categories`
/// arrays, both defaulting to empty when a key is missing so older or
/// partially written files still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub categories: Vec<Category>,
}
