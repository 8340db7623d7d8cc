//! Application setup and initialization

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use reelgen_core::Config;
use reelgen_provider::create_provider;
use reelgen_staging::StagingStore;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    let staging = StagingStore::new(&config.staging_dir)
        .await
        .context("Failed to initialize staging store")?;

    let provider =
        create_provider(&config).map_err(|e| anyhow::anyhow!("Failed to create provider: {}", e))?;

    tracing::info!(
        provider = provider.name(),
        staging_dir = %config.staging_dir,
        "Configuration loaded and validated successfully"
    );

    let state = Arc::new(AppState::new(config, staging, provider));
    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
