//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::{Bytes, BytesMut};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::resume::keywords::extract_keywords;
use crate::resume::scoring::score_resume;
use crate::state::AppState;

/// Multipart field the frontend sends the resume in.
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ResumeReport {
    pub uploaded: bool,
    pub summary: String,
    pub keywords: Vec<String>,
    pub score: u32,
}

/// The leading bytes of an uploaded file.
#[derive(Debug)]
struct SampledUpload {
    filename: String,
    content: Bytes,
}

/// GET /resume
pub async fn handle_resume_form() -> Json<Value> {
    Json(json!({ "message": "Resume upload endpoint", "uploaded": false }))
}

/// POST /resume
///
/// Samples at most `max_upload_bytes` of the `file` part, extracts keywords and
/// scores them against the saved profile. A non-multipart request counts as
/// "no file".
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeReport>, AppError> {
    let Ok(mut multipart) = multipart else {
        return Err(AppError::MissingUpload);
    };

    let upload = read_upload(&mut multipart, state.config.max_upload_bytes)
        .await?
        .ok_or(AppError::MissingUpload)?;

    let keywords = extract_keywords(&upload.content, state.config.keyword_top_k);
    let profile = state.profiles.load().await;
    let score = score_resume(&profile, &keywords, state.scorer.as_ref());

    info!(
        filename = %upload.filename,
        sampled_bytes = upload.content.len(),
        score,
        "Scored resume upload"
    );

    Ok(Json(ResumeReport {
        uploaded: true,
        summary: format!(
            "Uploaded file '{}' with {} bytes (sampled).",
            upload.filename,
            upload.content.len()
        ),
        keywords,
        score,
    }))
}

/// Reads the first `file` part, keeping at most `cap` bytes.
///
/// Returns `None` when there is no such part or it carries no filename.
async fn read_upload(
    multipart: &mut Multipart,
    cap: usize,
) -> Result<Option<SampledUpload>, AppError> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Ok(None),
        };

        let mut buf = BytesMut::with_capacity(cap.min(8 * 1024));
        while buf.len() < cap {
            let Some(chunk) = field
                .chunk()
                .await
                .map_err(|e| AppError::Upload(e.body_text()))?
            else {
                break;
            };
            let take = chunk.len().min(cap - buf.len());
            buf.extend_from_slice(&chunk[..take]);
        }
        debug!(filename = %filename, bytes = buf.len(), "Sampled upload");

        return Ok(Some(SampledUpload {
            filename,
            content: buf.freeze(),
        }));
    }

    Ok(None)
}
