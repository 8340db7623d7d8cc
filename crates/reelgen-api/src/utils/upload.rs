//! Common utilities for the upload handler

use axum::extract::Multipart;
use reelgen_core::{AppError, ValidationError};

/// Parsed `POST /api/generate` form
pub struct GenerateForm {
    pub payload: Vec<u8>,
    pub filename: String,
    pub prompt: Option<String>,
}

/// Extract the `model` file and optional `prompt` text from the multipart
/// form. Exactly one `model` field is accepted; unknown fields are ignored.
pub async fn extract_generate_form(mut multipart: Multipart) -> Result<GenerateForm, AppError> {
    let mut payload: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;
    let mut prompt: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart body: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "model" => {
                if payload.is_some() {
                    return Err(ValidationError::DuplicateField("model".to_string()).into());
                }
                filename = field.file_name().map(|s: &str| s.to_string());
                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;
                payload = Some(data.to_vec());
            }
            "prompt" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read prompt field: {}", e))
                })?;
                prompt = Some(text);
            }
            _ => {}
        }
    }

    // A file part without a filename is treated the same as no file part
    let (payload, filename) = match (payload, filename) {
        (Some(payload), Some(filename)) if !filename.is_empty() => (payload, filename),
        _ => return Err(ValidationError::MissingFile.into()),
    };

    Ok(GenerateForm {
        payload,
        filename,
        prompt,
    })
}
