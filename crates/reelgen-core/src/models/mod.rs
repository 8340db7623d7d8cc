pub mod job;

pub use job::{GenerationJob, GenerationResponse, JobStatus};
