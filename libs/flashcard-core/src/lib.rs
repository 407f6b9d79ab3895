//! Core library for the bilingual (English/Arabic) flashcard tool.
//!
//! Provides:
//! - Parser turning `term : [translation] : transliteration` paragraphs into cards
//! - Document reading for `.docx` and plain-text sources
//! - Multiple-choice quiz sessions
//! - Speech text cleanup, playback state and export naming
//! - Shared types (FlashcardRecord, Direction, QuestionView, etc.)

pub mod error;
pub mod export;
pub mod parser;
pub mod playback;
pub mod quiz;
pub mod source;
pub mod speech;
pub mod types;

pub use error::{LoadError, QuizError, Result};
pub use export::{archive_name, audio_file_name, combined_file_name, AudioLayout, FileNaming};
pub use parser::{parse, parse_line, parse_text};
pub use playback::{PlaybackId, PlaybackState};
pub use quiz::{fallback_distractors, QuizSession, CHOICE_COUNT};
pub use source::{load_flashcards, read_paragraphs};
pub use speech::{speech_text, split_for_synthesis, strip_symbols};
pub use types::{
    Direction, DirectionMode, FlashcardRecord, Language, Progress, QuestionView, ReviewEntry,
    SubmittedAnswer,
};
