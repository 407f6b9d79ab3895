//! Bulk export endpoint

use axum::{
    extract::State,
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::services::export::build_archive;
use crate::AppState;

static AUDIO_FILES_HEADER: HeaderName = HeaderName::from_static("x-audio-files");
static AUDIO_SKIPPED_HEADER: HeaderName = HeaderName::from_static("x-audio-skipped");

/// POST /api/export
pub async fn export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response> {
    let cards = state.deck.require_cards()?;

    tracing::info!(
        "Generating audio package for {} cards ({:?}, {:?})",
        cards.len(),
        request.layout,
        request.naming
    );
    let archive =
        build_archive(state.speech.as_ref(), cards, request.layout, request.naming).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", archive.file_name),
            ),
            (AUDIO_FILES_HEADER.clone(), archive.files_written.to_string()),
            (AUDIO_SKIPPED_HEADER.clone(), archive.skipped.to_string()),
        ],
        archive.bytes,
    )
        .into_response())
}
