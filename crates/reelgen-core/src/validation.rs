//! Upload validation
//!
//! Pure checks applied to an upload before anything touches the filesystem.
//! Rejections here short-circuit the request with no staging side effects.

use std::path::Path;

/// Validation errors for uploaded assets
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing model file upload")]
    MissingFile,

    #[error("Missing file extension (filename: {0})")]
    MissingExtension(String),

    #[error("Unsupported file type: .{extension} (supported: {allowed:?})")]
    UnsupportedExtension {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Empty file")]
    EmptyFile,

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Duplicate field: {0} (send exactly one)")]
    DuplicateField(String),
}

/// Uploaded asset validator
///
/// Enforces the upload constraints (extension allow-list, size cap) without
/// coupling to staging or transport details.
pub struct AssetValidator {
    max_file_size: usize,
    allowed_extensions: Vec<String>,
}

impl AssetValidator {
    pub fn new(max_file_size: usize, allowed_extensions: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_extensions,
        }
    }

    /// Validate filename extension against the allow-list, case-insensitively
    pub fn validate_extension(&self, filename: &str) -> Result<String, ValidationError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| ValidationError::MissingExtension(filename.to_string()))?;

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::UnsupportedExtension {
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        Ok(extension)
    }

    /// Validate payload size: zero-byte uploads and oversize uploads are rejected
    pub fn validate_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate all aspects of an upload. Pure; no side effects.
    pub fn validate(&self, filename: &str, payload_size: usize) -> Result<(), ValidationError> {
        self.validate_extension(filename)?;
        self.validate_size(payload_size)?;
        Ok(())
    }
}

/// Sanitize a declared filename to prevent path traversal and invalid characters.
/// Returns an error if the filename contains path traversal attempts.
pub fn sanitize_filename(filename: &str) -> Result<String, ValidationError> {
    const MAX_FILENAME_LENGTH: usize = 255;

    if filename.contains("..") {
        return Err(ValidationError::InvalidFilename(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let path = Path::new(filename);
    let filename_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(ValidationError::InvalidFilename(filename.to_string()));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_validator() -> AssetValidator {
        AssetValidator::new(
            10 * 1024 * 1024,
            vec!["gltf".to_string(), "glb".to_string()],
        )
    }

    #[test]
    fn test_validate_extension_ok() {
        let validator = test_validator();
        assert_eq!(validator.validate_extension("model.glb").unwrap(), "glb");
        assert_eq!(validator.validate_extension("scene.GLTF").unwrap(), "gltf");
    }

    #[test]
    fn test_validate_extension_unsupported() {
        let validator = test_validator();
        for filename in ["model.txt", "model.obj", "model.fbx", "archive.GLB.zip"] {
            assert!(matches!(
                validator.validate_extension(filename),
                Err(ValidationError::UnsupportedExtension { .. })
            ));
        }
    }

    #[test]
    fn test_validate_extension_missing() {
        let validator = test_validator();
        assert!(matches!(
            validator.validate_extension("noextension"),
            Err(ValidationError::MissingExtension(_))
        ));
    }

    #[test]
    fn test_validate_size_empty() {
        let validator = test_validator();
        assert!(matches!(
            validator.validate_size(0),
            Err(ValidationError::EmptyFile)
        ));
    }

    #[test]
    fn test_validate_size_too_large() {
        let validator = test_validator();
        assert!(matches!(
            validator.validate_size(11 * 1024 * 1024),
            Err(ValidationError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_all_ok() {
        let validator = test_validator();
        assert!(validator.validate("product.glb", 2048).is_ok());
    }

    #[test]
    fn test_validate_checks_extension_before_size() {
        // Fail fast on type before size so the caller reports the right reason
        let validator = test_validator();
        assert!(matches!(
            validator.validate("product.txt", 0),
            Err(ValidationError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_sanitize_filename_rejects_path_traversal() {
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("foo/../bar.glb").is_err());
    }

    #[test]
    fn test_sanitize_filename_strips_directories() {
        assert_eq!(
            sanitize_filename("/tmp/upload/product.glb").unwrap(),
            "product.glb"
        );
    }

    #[test]
    fn test_sanitize_filename_replaces_unsafe_characters() {
        assert_eq!(
            sanitize_filename("my product (v2).glb").unwrap(),
            "my_product__v2_.glb"
        );
    }
}
