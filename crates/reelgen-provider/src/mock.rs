//! Deterministic mock provider
//!
//! Models "successful synchronous completion": ignores the staged asset
//! bytes, fabricates a job identifier and returns a terminal `succeeded`
//! status with a configured demo video URL. Used for local development and as
//! the test double for the orchestration flow.

use crate::traits::{ProviderResult, VideoProvider};
use async_trait::async_trait;
use reelgen_core::models::{GenerationJob, JobStatus};
use reelgen_staging::StagedAsset;
use uuid::Uuid;

/// Mock video-generation provider
#[derive(Clone)]
pub struct MockProvider {
    demo_video_url: String,
}

impl MockProvider {
    /// The demo URL is explicit configuration rather than a constant so tests
    /// and deployments can override it.
    pub fn new(demo_video_url: String) -> Self {
        Self { demo_video_url }
    }
}

#[async_trait]
impl VideoProvider for MockProvider {
    async fn generate(&self, asset: &StagedAsset, prompt: &str) -> ProviderResult<GenerationJob> {
        let job = GenerationJob::new(
            format!("mock-{}", Uuid::new_v4()),
            JobStatus::Succeeded,
            Some(self.demo_video_url.clone()),
        );

        tracing::info!(
            job_id = %job.id,
            staging_key = %asset.key,
            prompt_len = prompt.len(),
            "Mock provider completed generation"
        );

        Ok(job)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelgen_staging::StagingStore;
    use tempfile::tempdir;

    async fn staged_asset() -> (tempfile::TempDir, StagedAsset) {
        let dir = tempdir().unwrap();
        let store = StagingStore::new(dir.path()).await.unwrap();
        let asset = store.stage(b"glb bytes", "product.glb").await.unwrap();
        (dir, asset)
    }

    #[tokio::test]
    async fn test_mock_returns_terminal_success() {
        let (_dir, asset) = staged_asset().await;
        let provider = MockProvider::new("https://example.com/demo.mp4".to_string());

        let job = provider.generate(&asset, "sleek and modern").await.unwrap();

        assert_eq!(job.status, JobStatus::Succeeded);
        assert_eq!(job.video_url.as_deref(), Some("https://example.com/demo.mp4"));
    }

    #[tokio::test]
    async fn test_mock_job_ids_are_distinct() {
        let (_dir, asset) = staged_asset().await;
        let provider = MockProvider::new("https://example.com/demo.mp4".to_string());

        let a = provider.generate(&asset, "prompt").await.unwrap();
        let b = provider.generate(&asset, "prompt").await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_mock_uses_configured_url() {
        let (_dir, asset) = staged_asset().await;
        let provider = MockProvider::new("https://cdn.test/override.mp4".to_string());

        let job = provider.generate(&asset, "prompt").await.unwrap();
        assert_eq!(job.video_url.as_deref(), Some("https://cdn.test/override.mp4"));
    }
}
