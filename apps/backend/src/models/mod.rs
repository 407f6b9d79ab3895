//! API request and response types

use flashcard_core::speech_text;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::deck::LoadStatus;

// Re-export shared types from flashcard-core
pub use flashcard_core::{
    AudioLayout, Direction, DirectionMode, FileNaming, FlashcardRecord, Language, PlaybackId,
    Progress, QuestionView, ReviewEntry, SubmittedAnswer,
};

// === Cards ===

/// A card as shown in flip mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub index: usize,
    pub term: String,
    pub translation: String,
    pub transliteration: String,
    /// Side shown first.
    pub front: String,
    /// Side revealed on flip, shown with the transliteration.
    pub back: String,
}

impl CardView {
    pub fn new(index: usize, card: &FlashcardRecord, direction: Direction) -> Self {
        Self {
            index,
            term: card.term.clone(),
            translation: card.translation.clone(),
            transliteration: card.transliteration.clone(),
            front: card.prompt(direction).to_string(),
            back: card.answer(direction).to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CardsQuery {
    #[serde(default)]
    pub direction: Direction,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardListResponse {
    pub direction: Direction,
    pub cards: Vec<CardView>,
}

/// What the speech service will actually be asked to say.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechPreview {
    pub english: String,
    pub arabic: String,
}

impl SpeechPreview {
    pub fn for_card(card: &FlashcardRecord) -> Self {
        Self {
            english: speech_text(&card.term, Language::English),
            arabic: speech_text(&card.translation, Language::Arabic),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardDetailResponse {
    pub card: CardView,
    pub speech: SpeechPreview,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: LoadStatus,
    pub source: String,
    pub card_count: usize,
    /// First few cards, for a quick look at what was parsed.
    pub sample: Vec<CardView>,
}

// === Audio ===

#[derive(Debug, Deserialize)]
pub struct AudioQuery {
    pub language: Language,
}

#[derive(Debug, Default, Deserialize)]
pub struct CombinedAudioQuery {
    #[serde(default)]
    pub layout: AudioLayout,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaybackResponse {
    pub active: Option<PlaybackId>,
    /// Clip that this request stopped, if any.
    pub stopped: Option<PlaybackId>,
}

// === Quiz ===

#[derive(Debug, Deserialize)]
pub struct StartQuizRequest {
    #[serde(default)]
    pub mode: DirectionMode,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizStatusResponse {
    pub quiz_id: Uuid,
    pub mode: DirectionMode,
    pub progress: Progress,
    pub answered: usize,
    pub current_answered: bool,
}

/// The correct answer shown after choosing (or on request).
#[derive(Debug, Serialize, Deserialize)]
pub struct Feedback {
    pub index: usize,
    pub correct_answer: String,
    /// Present only when the answer is the Arabic side.
    pub transliteration: Option<String>,
    pub your_answer: Option<SubmittedAnswer>,
}

impl Feedback {
    pub fn new(view: &QuestionView, your_answer: Option<SubmittedAnswer>) -> Self {
        let transliteration = (view.direction == Direction::TermToTranslation
            && !view.transliteration.is_empty())
        .then(|| view.transliteration.clone());
        Self {
            index: view.index,
            correct_answer: view.correct_answer.clone(),
            transliteration,
            your_answer,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub quiz_id: Uuid,
    pub index: usize,
    pub direction: Direction,
    pub prompt: String,
    pub choices: Vec<String>,
    pub progress: Progress,
    /// Filled once the question has been answered.
    pub feedback: Option<Feedback>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub quiz_id: Option<Uuid>,
    pub index: usize,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct SkipRequest {
    pub quiz_id: Option<Uuid>,
    pub index: usize,
}

/// `?quiz_id=` on commands without a body.
#[derive(Debug, Default, Deserialize)]
pub struct QuizIdQuery {
    pub quiz_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub quiz_id: Uuid,
    pub total: usize,
    pub entries: Vec<ReviewEntry>,
}

// === Export ===

#[derive(Debug, Default, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub layout: AudioLayout,
    #[serde(default)]
    pub naming: FileNaming,
}
