//! Generation job models
//!
//! A `GenerationJob` is the unit of work returned by a video provider for one
//! upload. `GenerationResponse` is the wire contract handed back to the
//! caller; its camelCase field names are consumed directly by the display
//! layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of a generation job.
///
/// The mock provider only ever reports `Succeeded`; the non-terminal variants
/// exist for real asynchronous providers that complete out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Succeeded | JobStatus::Failed)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobStatus::Pending => "pending",
            JobStatus::Running => "running",
            JobStatus::Succeeded => "succeeded",
            JobStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// A generation job as reported by a provider
#[derive(Debug, Clone)]
pub struct GenerationJob {
    /// Provider-assigned identifier, or locally generated when the provider
    /// gives none
    pub id: String,
    pub status: JobStatus,
    /// Present when the provider has produced a playable video
    pub video_url: Option<String>,
}

impl GenerationJob {
    pub fn new(id: String, status: JobStatus, video_url: Option<String>) -> Self {
        Self {
            id,
            status,
            video_url,
        }
    }
}

/// Response contract for `POST /api/generate`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub job_id: String,
    pub status: JobStatus,
    /// The prompt actually sent to the provider, after defaulting
    pub used_prompt: String,
    /// Original filename of the uploaded asset
    pub source_model: String,
    /// Present if and only if `status` is `succeeded`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl GenerationResponse {
    /// Assemble the response from a provider job.
    ///
    /// Upholds the contract that `video_url` is present iff the job
    /// succeeded: any URL attached to a non-terminal or failed job is dropped.
    pub fn from_job(job: GenerationJob, used_prompt: String, source_model: String) -> Self {
        let video_url = if job.status == JobStatus::Succeeded {
            job.video_url
        } else {
            None
        };

        GenerationResponse {
            job_id: job.id,
            status: job.status,
            used_prompt,
            source_model,
            video_url,
        }
    }
}
