//! Error types for flashcard-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LoadError.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while reading the source document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source document unavailable: {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

impl From<zip::result::ZipError> for LoadError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::InvalidDocument(err.to_string())
    }
}

impl From<quick_xml::Error> for LoadError {
    fn from(err: quick_xml::Error) -> Self {
        Self::InvalidDocument(err.to_string())
    }
}

/// Out-of-sequence calls on a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("no flashcards to quiz on")]
    EmptyCardSet,

    #[error("question count must be at least 1")]
    ZeroCount,

    #[error("quiz is already completed")]
    Completed,

    #[error("quiz is not completed yet")]
    NotCompleted,

    #[error("question {got} is not the current question {expected}")]
    IndexMismatch { expected: usize, got: usize },

    #[error("question {0} was already answered")]
    AlreadyAnswered(usize),

    #[error("question {index} is out of range for a quiz of {total}")]
    QuestionOutOfRange { index: usize, total: usize },
}
