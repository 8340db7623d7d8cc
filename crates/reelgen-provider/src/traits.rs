//! Provider abstraction trait
//!
//! All video-generation backends implement [`VideoProvider`] so the
//! orchestrator never depends on a concrete transport.

use async_trait::async_trait;
use reelgen_core::models::GenerationJob;
use reelgen_core::AppError;
use reelgen_staging::StagedAsset;
use thiserror::Error;

/// Provider operation errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Provider timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Timeout { secs } => AppError::ProviderTimeout { secs },
            other => AppError::Provider(other.to_string()),
        }
    }
}

/// Video-generation provider abstraction
///
/// Implementations take a staged asset plus the effective prompt and return a
/// job descriptor. A provider may complete synchronously (the mock always
/// does) or report a non-terminal status for out-of-band completion.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Submit one generation request for a staged asset.
    async fn generate(&self, asset: &StagedAsset, prompt: &str) -> ProviderResult<GenerationJob>;

    /// Short provider name for logging
    fn name(&self) -> &'static str;
}
