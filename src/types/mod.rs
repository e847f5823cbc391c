// LinkStash shared type definitions
// Each submodule defines types used across the application.

pub mod category;
pub mod draft;
pub mod errors;
pub mod link;
pub mod metadata;
pub mod snapshot;
