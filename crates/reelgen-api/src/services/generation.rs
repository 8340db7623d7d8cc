//! Job orchestration service
//!
//! Drives one upload through validation, staging, provider invocation and
//! response assembly. Each request is fully independent: the staged asset and
//! job live only for the duration of the call, and the staged file is
//! released on every exit path after staging succeeded.

use crate::state::AppState;
use reelgen_core::models::GenerationResponse;
use reelgen_core::validation::sanitize_filename;
use reelgen_core::AppError;
use std::time::Duration;

/// Transient input for one generation request. Not persisted beyond the
/// request lifetime.
pub struct UploadRequest {
    pub payload: Vec<u8>,
    pub filename: String,
    pub prompt: Option<String>,
}

/// Orchestrates the upload-to-job flow
pub struct GenerationService<'a> {
    state: &'a AppState,
}

impl<'a> GenerationService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// The prompt actually sent to the provider: the trimmed explicit prompt,
    /// or the configured default when empty or absent.
    fn effective_prompt(&self, prompt: Option<&str>) -> String {
        match prompt.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
            _ => self.state.config.default_prompt.clone(),
        }
    }

    /// Handle one upload request end to end.
    pub async fn handle_upload(
        &self,
        upload: UploadRequest,
    ) -> Result<GenerationResponse, AppError> {
        // Validation is pure and runs before any resource is allocated
        let filename = sanitize_filename(&upload.filename)?;
        self.state.validator.validate(&filename, upload.payload.len())?;

        let asset = self.state.staging.stage(&upload.payload, &filename).await?;

        let prompt = self.effective_prompt(upload.prompt.as_deref());
        let timeout_secs = self.state.config.provider_timeout_secs;

        // The provider call is the only potentially blocking step; bound it.
        let provider_result = tokio::time::timeout(
            Duration::from_secs(timeout_secs),
            self.state.provider.generate(&asset, &prompt),
        )
        .await;

        // Cleanup runs unconditionally, before any outcome is reported
        let release_result = self.state.staging.release(&asset).await;

        let job = match provider_result {
            Ok(Ok(job)) => job,
            Ok(Err(provider_err)) => {
                if let Err(release_err) = release_result {
                    tracing::warn!(
                        error = %release_err,
                        staging_key = %asset.key,
                        "Failed to release staged asset after provider error"
                    );
                }
                return Err(provider_err.into());
            }
            Err(_elapsed) => {
                if let Err(release_err) = release_result {
                    tracing::warn!(
                        error = %release_err,
                        staging_key = %asset.key,
                        "Failed to release staged asset after provider timeout"
                    );
                }
                return Err(AppError::ProviderTimeout { secs: timeout_secs });
            }
        };

        // Delete failures are infrastructure faults and must not be swallowed
        release_result?;

        tracing::info!(
            job_id = %job.id,
            status = %job.status,
            provider = self.state.provider.name(),
            source_model = %filename,
            "Generation request completed"
        );

        Ok(GenerationResponse::from_job(job, prompt, filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reelgen_core::models::GenerationJob;
    use reelgen_core::{Config, ValidationError};
    use reelgen_provider::{MockProvider, ProviderError, ProviderResult, VideoProvider};
    use reelgen_staging::{StagedAsset, StagingStore};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    /// Provider double that always fails, counting invocations
    struct FailingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl VideoProvider for FailingProvider {
        async fn generate(
            &self,
            _asset: &StagedAsset,
            _prompt: &str,
        ) -> ProviderResult<GenerationJob> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ProviderError::RequestFailed("upstream unavailable".into()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    /// Provider double that never completes, for timeout tests
    struct HangingProvider;

    #[async_trait]
    impl VideoProvider for HangingProvider {
        async fn generate(
            &self,
            _asset: &StagedAsset,
            _prompt: &str,
        ) -> ProviderResult<GenerationJob> {
            std::future::pending().await
        }

        fn name(&self) -> &'static str {
            "hanging"
        }
    }

    async fn test_state(provider: Arc<dyn VideoProvider>) -> (tempfile::TempDir, AppState) {
        let dir = tempdir().unwrap();
        let config = Config {
            staging_dir: dir.path().to_string_lossy().into_owned(),
            ..Config::default()
        };
        let staging = StagingStore::new(dir.path()).await.unwrap();
        (dir, AppState::new(config, staging, provider))
    }

    fn staging_entries(dir: &tempfile::TempDir) -> usize {
        std::fs::read_dir(dir.path()).unwrap().count()
    }

    #[tokio::test]
    async fn test_successful_upload() {
        let provider = Arc::new(MockProvider::new("https://example.com/demo.mp4".into()));
        let (dir, state) = test_state(provider).await;
        let service = GenerationService::new(&state);

        let response = service
            .handle_upload(UploadRequest {
                payload: b"glb bytes".to_vec(),
                filename: "product.glb".to_string(),
                prompt: Some("sleek and modern".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(response.used_prompt, "sleek and modern");
        assert_eq!(response.source_model, "product.glb");
        assert!(response.video_url.is_some());
        // Staged asset released after completion
        assert_eq!(staging_entries(&dir), 0);
    }

    #[tokio::test]
    async fn test_rejection_stages_nothing() {
        let provider = Arc::new(MockProvider::new("https://example.com/demo.mp4".into()));
        let (dir, state) = test_state(provider).await;
        let service = GenerationService::new(&state);

        let result = service
            .handle_upload(UploadRequest {
                payload: b"plain text".to_vec(),
                filename: "product.txt".to_string(),
                prompt: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Validation(
                ValidationError::UnsupportedExtension { .. }
            ))
        ));
        assert_eq!(staging_entries(&dir), 0);
    }

    #[tokio::test]
    async fn test_empty_payload_rejected() {
        let provider = Arc::new(MockProvider::new("https://example.com/demo.mp4".into()));
        let (dir, state) = test_state(provider).await;
        let service = GenerationService::new(&state);

        let result = service
            .handle_upload(UploadRequest {
                payload: Vec::new(),
                filename: "product.glb".to_string(),
                prompt: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::EmptyFile))
        ));
        assert_eq!(staging_entries(&dir), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_still_releases_staging() {
        let provider = Arc::new(FailingProvider {
            calls: AtomicUsize::new(0),
        });
        let (dir, state) = test_state(provider.clone()).await;
        let service = GenerationService::new(&state);

        let result = service
            .handle_upload(UploadRequest {
                payload: b"glb bytes".to_vec(),
                filename: "product.glb".to_string(),
                prompt: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::Provider(_))));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(staging_entries(&dir), 0);
    }

    #[tokio::test]
    async fn test_provider_timeout_releases_staging() {
        let provider = Arc::new(HangingProvider);
        let dir = tempdir().unwrap();
        let config = Config {
            staging_dir: dir.path().to_string_lossy().into_owned(),
            provider_timeout_secs: 1,
            ..Config::default()
        };
        let staging = StagingStore::new(dir.path()).await.unwrap();
        let state = AppState::new(config, staging, provider);
        let service = GenerationService::new(&state);

        let result = service
            .handle_upload(UploadRequest {
                payload: b"glb bytes".to_vec(),
                filename: "product.glb".to_string(),
                prompt: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::ProviderTimeout { secs: 1 })));
        assert_eq!(staging_entries(&dir), 0);
    }

    #[tokio::test]
    async fn test_empty_prompt_uses_default() {
        let provider = Arc::new(MockProvider::new("https://example.com/demo.mp4".into()));
        let (_dir, state) = test_state(provider).await;
        let service = GenerationService::new(&state);

        let response = service
            .handle_upload(UploadRequest {
                payload: b"glb bytes".to_vec(),
                filename: "product.glb".to_string(),
                prompt: Some("   ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(response.used_prompt, state.config.default_prompt);
    }

    #[tokio::test]
    async fn test_repeat_uploads_get_distinct_job_ids() {
        let provider = Arc::new(MockProvider::new("https://example.com/demo.mp4".into()));
        let (_dir, state) = test_state(provider).await;
        let service = GenerationService::new(&state);

        let upload = || UploadRequest {
            payload: b"glb bytes".to_vec(),
            filename: "product.glb".to_string(),
            prompt: Some("same prompt".to_string()),
        };

        let a = service.handle_upload(upload()).await.unwrap();
        let b = service.handle_upload(upload()).await.unwrap();

        assert_ne!(a.job_id, b.job_id);
        assert_eq!(a.used_prompt, b.used_prompt);
        assert_eq!(a.source_model, b.source_model);
    }
}
