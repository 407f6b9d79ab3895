//! Audio endpoints

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use flashcard_core::combined_file_name;

use crate::error::Result;
use crate::models::*;
use crate::services::speech::{speak, speak_sequence};
use crate::AppState;

const AUDIO_MPEG: &str = "audio/mpeg";

/// GET /api/cards/{index}/audio?language=en|ar
pub async fn card_audio(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<AudioQuery>,
) -> Result<Response> {
    let card = state.deck.get(index)?;
    let text = card.text_in(query.language);

    let audio = speak(state.speech.as_ref(), text, query.language).await?;

    Ok(([(header::CONTENT_TYPE, AUDIO_MPEG)], audio).into_response())
}

/// GET /api/cards/{index}/audio/combined?layout=
///
/// Both languages back to back, offered as a download.
pub async fn combined_audio(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<CombinedAudioQuery>,
) -> Result<Response> {
    let card = state.deck.get(index)?;
    let parts: Vec<_> = query
        .layout
        .languages()
        .iter()
        .map(|&language| (card.text_in(language), language))
        .collect();

    let audio = speak_sequence(state.speech.as_ref(), &parts).await?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        combined_file_name(index, query.layout)
    );

    Ok((
        [
            (header::CONTENT_TYPE, AUDIO_MPEG.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        audio,
    )
        .into_response())
}
