use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Staging operation errors
#[derive(Debug, Error)]
pub enum StagingError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid staging key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for staging operations
pub type StagingResult<T> = Result<T, StagingError>;

impl From<StagingError> for reelgen_core::AppError {
    fn from(err: StagingError) -> Self {
        reelgen_core::AppError::Staging(err.to_string())
    }
}

/// Handle to an asset staged on the local filesystem.
///
/// Exclusively owned by the request that created it. The owning request must
/// call [`StagingStore::release`] on every exit path; release is idempotent.
#[derive(Debug, Clone)]
pub struct StagedAsset {
    /// Unique per-request identifier, also the basis of the staging key
    pub id: Uuid,
    /// Staging key relative to the store's base directory
    pub key: String,
    /// Absolute path of the staged file
    pub path: PathBuf,
    /// Sanitized original filename as declared by the client
    pub original_filename: String,
    /// Lowercased file extension
    pub extension: String,
    /// Payload size in bytes
    pub size: usize,
}

/// Local filesystem staging store
#[derive(Clone)]
pub struct StagingStore {
    base_path: PathBuf,
}

impl StagingStore {
    /// Create a new StagingStore rooted at `base_path`, creating the
    /// directory if needed.
    pub async fn new(base_path: impl Into<PathBuf>) -> StagingResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StagingError::ConfigError(format!(
                "Failed to create staging directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(StagingStore { base_path })
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    /// Derive the staging key for a request id and filename.
    ///
    /// The extension is re-sanitized here: keys must never contain anything a
    /// client could use to escape the staging directory.
    fn generate_key(id: Uuid, filename: &str) -> StagingResult<String> {
        let extension: String = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        if extension.is_empty() {
            return Err(StagingError::InvalidKey(format!(
                "Filename has no usable extension: {}",
                filename
            )));
        }

        Ok(format!("{}.{}", id, extension))
    }

    /// Write a payload to a uniquely named transient file.
    ///
    /// Each call uses a fresh uuid, so concurrent uploads of identically
    /// named files never collide.
    pub async fn stage(&self, payload: &[u8], filename: &str) -> StagingResult<StagedAsset> {
        let id = Uuid::new_v4();
        let key = Self::generate_key(id, filename)?;
        let path = self.base_path.join(&key);
        let start = std::time::Instant::now();

        let write_result = async {
            let mut file = fs::File::create(&path).await.map_err(|e| {
                StagingError::WriteFailed(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;

            file.write_all(payload).await.map_err(|e| {
                StagingError::WriteFailed(format!(
                    "Failed to write file {}: {}",
                    path.display(),
                    e
                ))
            })?;

            file.sync_all().await.map_err(|e| {
                StagingError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
            })
        }
        .await;

        // A failed write must not leave a partial file behind
        if let Err(err) = write_result {
            let _ = fs::remove_file(&path).await;
            return Err(err);
        }

        let extension = key.rsplit('.').next().unwrap_or_default().to_string();

        tracing::info!(
            staging_key = %key,
            size_bytes = payload.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Asset staged"
        );

        Ok(StagedAsset {
            id,
            key,
            path,
            original_filename: filename.to_string(),
            extension,
            size: payload.len(),
        })
    }

    /// Delete a staged asset. Idempotent: releasing an already released asset
    /// is Ok.
    pub async fn release(&self, asset: &StagedAsset) -> StagingResult<()> {
        let start = std::time::Instant::now();

        // Only a clean "not found" counts as already released; a stat failure
        // is a real delete-path fault and must surface.
        match fs::try_exists(&asset.path).await {
            Ok(false) => return Ok(()),
            Ok(true) => {}
            Err(e) => {
                return Err(StagingError::DeleteFailed(format!(
                    "Failed to stat file {}: {}",
                    asset.path.display(),
                    e
                )))
            }
        }

        fs::remove_file(&asset.path).await.map_err(|e| {
            StagingError::DeleteFailed(format!(
                "Failed to delete file {}: {}",
                asset.path.display(),
                e
            ))
        })?;

        tracing::info!(
            staging_key = %asset.key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Staged asset released"
        );

        Ok(())
    }
}
