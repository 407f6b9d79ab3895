//! Looping playback endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/playback
pub async fn current(State(state): State<AppState>) -> Result<Json<PlaybackResponse>> {
    let playback = state.lock_playback()?;
    Ok(Json(PlaybackResponse {
        active: playback.active(),
        stopped: None,
    }))
}

/// POST /api/playback/start
pub async fn start(
    State(state): State<AppState>,
    Json(id): Json<PlaybackId>,
) -> Result<Json<PlaybackResponse>> {
    state.deck.get(id.card_index)?;

    let mut playback = state.lock_playback()?;
    let stopped = playback.start(id);
    tracing::debug!("Looping card {} ({})", id.card_index, id.language.tag());

    Ok(Json(PlaybackResponse {
        active: playback.active(),
        stopped,
    }))
}

/// POST /api/playback/stop
pub async fn stop(State(state): State<AppState>) -> Result<Json<PlaybackResponse>> {
    let stopped = state.lock_playback()?.stop();
    Ok(Json(PlaybackResponse {
        active: None,
        stopped,
    }))
}
