//! `POST /api/generate` handler

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::generation::{GenerationService, UploadRequest};
use crate::state::AppState;
use crate::utils::upload::extract_generate_form;
use axum::{
    extract::{Multipart, State},
    Json,
};
use reelgen_core::models::GenerationResponse;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "generate",
    request_body(content = inline(Object), content_type = "multipart/form-data",
        description = "Fields: `model` (gltf/glb file, required), `prompt` (text, optional)"),
    responses(
        (status = 200, description = "Generation job created", body = GenerationResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 502, description = "Provider error", body = ErrorResponse),
        (status = 504, description = "Provider timeout", body = ErrorResponse)
    )
)]
pub async fn generate_video(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<GenerationResponse>, HttpAppError> {
    let form = extract_generate_form(multipart).await?;

    tracing::debug!(
        filename = %form.filename,
        size_bytes = form.payload.len(),
        has_prompt = form.prompt.is_some(),
        "Received generation request"
    );

    let service = GenerationService::new(&state);
    let response = service
        .handle_upload(UploadRequest {
            payload: form.payload,
            filename: form.filename,
            prompt: form.prompt,
        })
        .await?;

    Ok(Json(response))
}
