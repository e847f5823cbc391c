// LinkStash services
// Metadata fetching and the enrichment pipeline that applies results to
// in-progress edit drafts.

pub mod enrichment;
pub mod metadata_fetcher;
