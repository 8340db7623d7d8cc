//! Shared application state

use reelgen_core::{AssetValidator, Config};
use reelgen_provider::VideoProvider;
use reelgen_staging::StagingStore;
use std::sync::Arc;

/// State shared by all request handlers.
///
/// Everything here is either immutable or internally synchronized; requests
/// never share mutable state with each other.
pub struct AppState {
    pub config: Config,
    pub staging: StagingStore,
    pub provider: Arc<dyn VideoProvider>,
    pub validator: AssetValidator,
}

impl AppState {
    pub fn new(config: Config, staging: StagingStore, provider: Arc<dyn VideoProvider>) -> Self {
        let validator = AssetValidator::new(
            config.max_upload_size_bytes,
            config.allowed_extensions.clone(),
        );

        AppState {
            config,
            staging,
            provider,
            validator,
        }
    }
}
