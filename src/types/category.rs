use serde::{Deserialize, Serialize};

/// A user-defined category for organizing links.
///
/// `link_count` is a derived, cached aggregate: the store recomputes it for
/// every category after each mutation, so it always equals the number of
/// links whose `category_id` points here. It is never authoritative on its
/// own; a value supplied by a caller or read from disk is overwritten by the
/// next recount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Optional reference to a display icon resource.
    #[serde(default)]
    pub icon_res_id: Option<i32>,
    #[serde(default)]
    pub link_count: i64,
}
