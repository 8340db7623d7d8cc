//! Reelgen Staging Library
//!
//! Transient filesystem staging for uploaded assets. An accepted upload is
//! written under a per-request unique key for the duration of one generation
//! request and released on every exit path.
//!
//! # Staging key format
//!
//! Keys are `{uuid}.{extension}` so concurrent uploads of the same filename
//! never collide. Keys are generated internally and never derived from
//! client-controlled paths.

pub mod store;

// Re-export commonly used types
pub use store::{StagedAsset, StagingError, StagingResult, StagingStore};
