//! The card sequence loaded at startup.

use std::path::Path;

use flashcard_core::{load_flashcards, FlashcardRecord, LoadError};
use serde::Serialize;

use crate::error::{ApiError, Result};

/// Outcome of loading the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    Loaded { count: usize },
    /// The document was read but no line could be turned into a card.
    Empty,
    /// The document could not be read at all.
    Unavailable { message: String },
}

/// Read-only card sequence plus how it was obtained.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<FlashcardRecord>,
    status: LoadStatus,
    source: String,
}

impl Deck {
    /// Load the document at `path`. Failures leave an empty deck with the
    /// reason recorded in its status.
    pub fn load(path: &Path) -> Self {
        let source = path.display().to_string();
        match load_flashcards(path) {
            Ok(cards) => {
                if cards.is_empty() {
                    tracing::warn!("No flashcards loaded from {}. Check document format.", source);
                } else {
                    tracing::info!("Loaded {} flashcards from {}", cards.len(), source);
                }
                Self::from_cards(cards, source)
            }
            Err(err) => {
                match &err {
                    LoadError::SourceUnavailable { .. } => {
                        tracing::error!("File not found or unreadable: {}", source)
                    }
                    LoadError::InvalidDocument(reason) => {
                        tracing::error!("Could not read {}: {}", source, reason)
                    }
                }
                Self {
                    cards: Vec::new(),
                    status: LoadStatus::Unavailable {
                        message: err.to_string(),
                    },
                    source,
                }
            }
        }
    }

    pub fn from_cards(cards: Vec<FlashcardRecord>, source: impl Into<String>) -> Self {
        let status = if cards.is_empty() {
            LoadStatus::Empty
        } else {
            LoadStatus::Loaded { count: cards.len() }
        };
        Self {
            cards,
            status,
            source: source.into(),
        }
    }

    pub fn cards(&self) -> &[FlashcardRecord] {
        &self.cards
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// All cards, or an error when there are none to work with.
    pub fn require_cards(&self) -> Result<&[FlashcardRecord]> {
        match &self.status {
            LoadStatus::Loaded { .. } => Ok(&self.cards),
            LoadStatus::Empty => Err(ApiError::CardsUnavailable(
                "no flashcards loaded, check document format".to_string(),
            )),
            LoadStatus::Unavailable { message } => {
                Err(ApiError::CardsUnavailable(message.clone()))
            }
        }
    }

    pub fn get(&self, index: usize) -> Result<&FlashcardRecord> {
        self.require_cards()?
            .get(index)
            .ok_or_else(|| ApiError::NotFound(format!("card {}", index)))
    }
}
