//! Error types module
//!
//! The unified `AppError` enum covers every failure class the orchestration
//! flow can surface: validation rejections, staging faults, provider faults
//! and timeouts, and unexpected internal errors. `ErrorMetadata` lets each
//! variant self-describe its HTTP presentation so the API layer stays generic.

use crate::validation::ValidationError;
use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like provider timeouts
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "PROVIDER_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Staging error: {0}")]
    Staging(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider timed out after {secs}s")]
    ProviderTimeout { secs: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation",
            AppError::BadRequest(_) => "BadRequest",
            AppError::Staging(_) => "Staging",
            AppError::Provider(_) => "Provider",
            AppError::ProviderTimeout { .. } => "ProviderTimeout",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::Validation(ValidationError::FileTooLarge { .. }) => 413,
            AppError::Validation(_) => 400,
            AppError::BadRequest(_) => 400,
            AppError::Staging(_) => 500,
            AppError::Provider(_) => 502,
            AppError::ProviderTimeout { .. } => 504,
            AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(ValidationError::FileTooLarge { .. }) => "PAYLOAD_TOO_LARGE",
            AppError::Validation(_) => "INVALID_INPUT",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Staging(_) => "STAGING_ERROR",
            AppError::Provider(_) => "PROVIDER_ERROR",
            AppError::ProviderTimeout { .. } => "PROVIDER_TIMEOUT",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            AppError::Validation(_) => false,
            AppError::BadRequest(_) => false,
            AppError::Staging(_) => true,
            AppError::Provider(_) => true,
            AppError::ProviderTimeout { .. } => true,
            AppError::Internal(_) => true,
        }
    }

    fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Validation(ValidationError::FileTooLarge { .. }) => {
                Some("Reduce file size and try again")
            }
            AppError::Validation(_) => Some("Check the uploaded file and try again"),
            AppError::BadRequest(_) => Some("Check request format and parameters"),
            AppError::Staging(_) => Some("Retry after a short delay"),
            AppError::Provider(_) => Some("Retry after a short delay"),
            AppError::ProviderTimeout { .. } => Some("Retry after a short delay"),
            AppError::Internal(_) => Some("Retry after a short delay"),
        }
    }

    fn is_sensitive(&self) -> bool {
        match self {
            AppError::Validation(_) => false,
            AppError::BadRequest(_) => false,
            AppError::Staging(_) => true,
            AppError::Provider(_) => true,
            AppError::ProviderTimeout { .. } => false,
            AppError::Internal(_) => true,
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::Validation(_) => LogLevel::Debug,
            AppError::BadRequest(_) => LogLevel::Debug,
            AppError::Staging(_) => LogLevel::Error,
            AppError::Provider(_) => LogLevel::Error,
            AppError::ProviderTimeout { .. } => LogLevel::Warn,
            AppError::Internal(_) => LogLevel::Error,
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Validation messages are user-correctable; pass them through verbatim
            AppError::Validation(err) => err.to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Staging(_) => "Failed to stage uploaded asset".to_string(),
            AppError::Provider(_) => "Video generation failed".to_string(),
            AppError::ProviderTimeout { secs } => {
                format!("Video generation timed out after {}s", secs)
            }
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}
