//! Remote video-generation provider
//!
//! HTTP client for a hosted generation service. Submits the staged asset and
//! effective prompt as one JSON request and maps the service's job descriptor
//! into the domain model. The service may answer with a terminal status
//! immediately or with `pending`/`running` for asynchronous completion; both
//! are passed through unchanged.

use crate::traits::{ProviderError, ProviderResult, VideoProvider};
use async_trait::async_trait;
use base64::Engine;
use reelgen_core::models::{GenerationJob, JobStatus};
use reelgen_staging::StagedAsset;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteJobResponse {
    job_id: Option<String>,
    status: String,
    video_url: Option<String>,
    error: Option<String>,
}

/// Remote video-generation provider
pub struct RemoteProvider {
    http_client: reqwest::Client,
    api_base: String,
    api_key: String,
    timeout_secs: u64,
}

impl RemoteProvider {
    pub fn new(api_base: String, api_key: String, timeout_secs: u64) -> ProviderResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            timeout_secs,
        })
    }

    fn parse_status(raw: &str) -> ProviderResult<JobStatus> {
        match raw {
            "pending" | "queued" => Ok(JobStatus::Pending),
            "running" | "processing" => Ok(JobStatus::Running),
            "succeeded" => Ok(JobStatus::Succeeded),
            "failed" => Ok(JobStatus::Failed),
            other => Err(ProviderError::InvalidResponse(format!(
                "Unknown job status '{}'",
                other
            ))),
        }
    }

    fn map_job(response: RemoteJobResponse) -> ProviderResult<GenerationJob> {
        if let Some(error) = response.error {
            return Err(ProviderError::RequestFailed(error));
        }

        let status = Self::parse_status(&response.status)?;

        // A succeeded job without a playable URL breaks the response contract
        if status == JobStatus::Succeeded && response.video_url.is_none() {
            return Err(ProviderError::InvalidResponse(
                "Job succeeded but no video URL was returned".to_string(),
            ));
        }

        let id = response
            .job_id
            .unwrap_or_else(|| format!("local-{}", Uuid::new_v4()));

        Ok(GenerationJob::new(id, status, response.video_url))
    }
}

#[async_trait]
impl VideoProvider for RemoteProvider {
    async fn generate(&self, asset: &StagedAsset, prompt: &str) -> ProviderResult<GenerationJob> {
        let url = format!("{}/v1/jobs", self.api_base);

        let asset_bytes = tokio::fs::read(&asset.path).await.map_err(|e| {
            ProviderError::RequestFailed(format!("Failed to read staged asset: {}", e))
        })?;
        let asset_b64 = base64::engine::general_purpose::STANDARD.encode(asset_bytes);

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "prompt": prompt,
                "sourceModel": asset.original_filename,
                "asset": asset_b64,
            }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        secs: self.timeout_secs,
                    }
                } else {
                    ProviderError::RequestFailed(format!("Request to provider failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status.as_u16() {
                429 => ProviderError::RateLimited(body),
                401 | 403 => ProviderError::AuthFailed(body),
                _ => ProviderError::RequestFailed(format!("{} - {}", status, body)),
            });
        }

        let remote_job: RemoteJobResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse provider response: {}", e))
        })?;

        let job = Self::map_job(remote_job)?;

        tracing::info!(
            job_id = %job.id,
            status = %job.status,
            staging_key = %asset.key,
            "Remote provider accepted generation request"
        );

        Ok(job)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
