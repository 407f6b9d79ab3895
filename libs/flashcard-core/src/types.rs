//! Core types for the bilingual flashcard application.

use serde::{Deserialize, Serialize};

/// One term/translation/transliteration triple extracted from the source document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlashcardRecord {
    /// English phrase, with any speaker prefix removed.
    pub term: String,
    /// Arabic phrase.
    pub translation: String,
    /// Latin-script rendering of the translation.
    pub transliteration: String,
}

impl FlashcardRecord {
    pub fn new(
        term: impl Into<String>,
        translation: impl Into<String>,
        transliteration: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
            transliteration: transliteration.into(),
        }
    }

    /// Text shown as the prompt for the given direction.
    pub fn prompt(&self, direction: Direction) -> &str {
        match direction {
            Direction::TermToTranslation => &self.term,
            Direction::TranslationToTerm => &self.translation,
        }
    }

    /// Text expected as the answer for the given direction.
    pub fn answer(&self, direction: Direction) -> &str {
        match direction {
            Direction::TermToTranslation => &self.translation,
            Direction::TranslationToTerm => &self.term,
        }
    }

    /// Field text in the given language.
    pub fn text_in(&self, language: Language) -> &str {
        match language {
            Language::English => &self.term,
            Language::Arabic => &self.translation,
        }
    }
}

/// Language of a card field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    /// BCP-47 tag passed to the speech service.
    pub fn tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    /// Parse from a language tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Self::English),
            "ar" => Some(Self::Arabic),
            _ => None,
        }
    }

    /// Lowercase name used in file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Arabic => "arabic",
        }
    }
}

/// Which field is the prompt and which is the expected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    TermToTranslation,
    TranslationToTerm,
}

impl Default for Direction {
    fn default() -> Self {
        Self::TermToTranslation
    }
}

impl Direction {
    /// Language of the prompt side.
    pub fn prompt_language(self) -> Language {
        match self {
            Self::TermToTranslation => Language::English,
            Self::TranslationToTerm => Language::Arabic,
        }
    }

    /// Language of the answer side.
    pub fn answer_language(self) -> Language {
        match self {
            Self::TermToTranslation => Language::Arabic,
            Self::TranslationToTerm => Language::English,
        }
    }
}

/// Direction setting for a whole quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionMode {
    TermToTranslation,
    TranslationToTerm,
    /// Direction is chosen per question by a fair coin flip.
    Mixed,
}

impl Default for DirectionMode {
    fn default() -> Self {
        Self::TermToTranslation
    }
}

impl DirectionMode {
    /// The fixed direction, or `None` for mixed quizzes.
    pub fn fixed(self) -> Option<Direction> {
        match self {
            Self::TermToTranslation => Some(Direction::TermToTranslation),
            Self::TranslationToTerm => Some(Direction::TranslationToTerm),
            Self::Mixed => None,
        }
    }
}

/// What the user did with a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum SubmittedAnswer {
    Answer(String),
    Skipped,
}

impl SubmittedAnswer {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// A quiz question as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub index: usize,
    pub direction: Direction,
    pub prompt: String,
    pub correct_answer: String,
    /// Only meaningful for term to translation questions.
    pub transliteration: String,
}

/// One line of the review shown after a quiz ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub index: usize,
    pub question: String,
    pub user_answer: SubmittedAnswer,
    pub correct_answer: String,
    pub direction: Direction,
    pub transliteration: String,
}

/// Position within a running quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based number of the current question.
    pub question_number: usize,
    pub total: usize,
    /// Share of questions already passed, rounded down.
    pub percent: u32,
    pub completed: bool,
}
