//! Status and reset endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

const SAMPLE_SIZE: usize = 5;

/// GET /api/status
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let deck = &state.deck;
    let sample = deck
        .cards()
        .iter()
        .take(SAMPLE_SIZE)
        .enumerate()
        .map(|(index, card)| CardView::new(index, card, Direction::TermToTranslation))
        .collect();

    Json(StatusResponse {
        status: deck.status().clone(),
        source: deck.source().to_string(),
        card_count: deck.cards().len(),
        sample,
    })
}

/// POST /api/reset
///
/// Drops the quiz and stops playback. The loaded cards stay.
pub async fn reset(State(state): State<AppState>) -> Result<Json<PlaybackResponse>> {
    *state.lock_quiz()? = None;
    let stopped = state.lock_playback()?.stop();

    tracing::info!("Application state reset");

    Ok(Json(PlaybackResponse {
        active: None,
        stopped,
    }))
}
