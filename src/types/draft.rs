use crate::types::link::Link;

/// Ephemeral working state for an in-progress add/edit flow.
///
/// Never persisted: it exists only for the duration of the flow, is
/// discarded on cancel, and becomes a store mutation on save. `target_link_id`
/// is `Some` when editing an existing link and `None` when adding a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditDraft {
    pub url: String,
    pub title: String,
    pub description: String,
    /// Fetched preview image. There is no user-facing field for it, so
    /// enrichment results always overwrite it.
    pub image_url: Option<String>,
    pub selected_category_id: Option<String>,
    pub is_favorite: bool,
    pub target_link_id: Option<String>,
}

impl EditDraft {
    /// Seeds a draft from a stored link for editing.
    pub fn from_link(link: &Link) -> Self {
        Self {
            url: link.url.clone(),
            title: link.title.clone().unwrap_or_default(),
            description: link.description.clone().unwrap_or_default(),
            image_url: link.image_url.clone(),
            selected_category_id: link.category_id.clone(),
            is_favorite: link.is_favorite,
            target_link_id: Some(link.id.clone()),
        }
    }
}
