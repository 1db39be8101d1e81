//! Axum route handlers for the Resume API.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::document::{
    classify, render_document, ClassifiedLine, DocumentFormat, RenderedDocument,
};
use crate::errors::AppError;
use crate::generation::generator::generate_resume;
use crate::models::resume::{RenderRequest, ResumeRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub request_id: Uuid,
    pub name: String,
    pub resume_text: String,
    /// Classified preview of `resume_text`, exactly as the renderers will see it.
    pub lines: Vec<ClassifiedLine>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// Validates the form, calls the model, and returns the text with a classified preview.
/// Nothing is rendered; pass the text to `/render` to download it.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let generated = generate_resume(state.writer.as_ref(), &request).await?;
    let lines = classify(&generated.resume_text);

    Ok(Json(GenerateResponse {
        request_id: generated.request_id,
        name: generated.name,
        resume_text: generated.resume_text,
        lines,
    }))
}

/// POST /api/v1/resumes/render
///
/// Renders already-generated text as a PDF or DOCX download. Empty text is allowed and
/// yields a document containing only the title.
pub async fn handle_render(Json(request): Json<RenderRequest>) -> Result<Response, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let document = render_in_background(request.name, request.resume_text, request.format).await?;
    document_response(document)
}

/// POST /api/v1/resumes
///
/// Full pipeline: validate → generate → render in `request.format` → download.
pub async fn handle_generate_and_render(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Response, AppError> {
    let generated = generate_resume(state.writer.as_ref(), &request).await?;

    let document =
        render_in_background(generated.name, generated.resume_text, request.format).await?;
    info!(
        request_id = %generated.request_id,
        file_name = %document.file_name,
        bytes = document.bytes.len(),
        "Resume rendered"
    );

    document_response(document)
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Rendering is CPU-bound; keep it off the async executor.
async fn render_in_background(
    name: String,
    resume_text: String,
    format: DocumentFormat,
) -> Result<RenderedDocument, AppError> {
    let document =
        tokio::task::spawn_blocking(move || render_document(&name, &resume_text, format))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}"))
            })??;
    Ok(document)
}

fn document_response(document: RenderedDocument) -> Result<Response, AppError> {
    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        document.file_name
    ))
    .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid Content-Disposition: {e}")))?;

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static(document.format.content_type()),
        ),
        (header::CONTENT_DISPOSITION, disposition),
    ];

    Ok((headers, Bytes::from(document.bytes)).into_response())
}
