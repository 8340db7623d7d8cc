//! Reelgen API Library
//!
//! HTTP surface for the generation service: the upload handler, the
//! orchestration service, error presentation and application setup.

// Module declarations
mod api_doc;
mod handlers;
mod utils;

// Public modules
pub mod error;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::ErrorResponse;
pub use services::generation::{GenerationService, UploadRequest};
pub use setup::initialize_app;
