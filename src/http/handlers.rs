use anyhow::Context;

use super::state::AppState;
use crate::analysis;
use crate::error::{ErrorResponse, RelayError};
use crate::openai::AudioUpload;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub transcript: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/transcribe
/// Relay an uploaded audio file to the transcription endpoint
pub async fn transcribe_audio(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Response {
    // A non-multipart body has no file field either; both get the same 400.
    let field = match multipart {
        Some(multipart) => read_audio_field(multipart).await,
        None => Ok(None),
    };

    let upload = match field {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file provided".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            error!("Failed to read multipart body: {}", e);
            return e.into_response();
        }
    };

    info!(
        "Transcribing upload: {} ({} bytes)",
        upload.filename,
        upload.data.len()
    );

    match state.openai.transcribe(upload).await {
        Ok(transcript) => (StatusCode::OK, Json(TranscribeResponse { transcript })).into_response(),
        Err(e) => {
            error!("Transcription failed: {}", e);
            e.into_response()
        }
    }
}

/// POST /api/analyze
/// Run the three-step analysis pipeline over a transcript
pub async fn analyze_transcript(
    State(state): State<AppState>,
    body: Option<Json<AnalyzeRequest>>,
) -> Response {
    let transcript = match body {
        Some(Json(AnalyzeRequest {
            transcript: Some(transcript),
        })) => transcript,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No transcript provided".to_string(),
                }),
            )
                .into_response();
        }
    };

    info!("Analyzing transcript ({} chars)", transcript.len());

    match analysis::analyze_transcript(&state.openai, &transcript).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!("Analysis failed: {}", e);
            e.into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Pull the `file` field out of the multipart body. Returns Ok(None) when the
/// body has no field with that name.
async fn read_audio_field(mut multipart: Multipart) -> Result<Option<AudioUpload>, RelayError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .context("Malformed multipart body")?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("audio").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .context("Failed to read uploaded file")?
            .to_vec();

        return Ok(Some(AudioUpload {
            data,
            filename,
            content_type,
        }));
    }

    Ok(None)
}
