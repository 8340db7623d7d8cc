//! Reelgen Core Library
//!
//! Shared foundation for the reelgen service: configuration, the unified
//! error taxonomy, domain models for generation jobs, and upload validation.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use validation::{AssetValidator, ValidationError};
