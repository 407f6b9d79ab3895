//! Card endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/cards
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CardsQuery>,
) -> Result<Json<CardListResponse>> {
    let cards = state
        .deck
        .require_cards()?
        .iter()
        .enumerate()
        .map(|(index, card)| CardView::new(index, card, query.direction))
        .collect();

    Ok(Json(CardListResponse {
        direction: query.direction,
        cards,
    }))
}

/// GET /api/cards/{index}
pub async fn show(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<CardsQuery>,
) -> Result<Json<CardDetailResponse>> {
    let card = state.deck.get(index)?;

    Ok(Json(CardDetailResponse {
        card: CardView::new(index, card, query.direction),
        speech: SpeechPreview::for_card(card),
    }))
}
