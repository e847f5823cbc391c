/// Page metadata extracted from a fetched URL.
///
/// All fields are optional; a page with none of the expected tags yields a
/// value with every field `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl LinkMetadata {
    /// True when extraction found nothing at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.image_url.is_none()
    }
}
