//! Naming rules for bulk audio export.

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{FlashcardRecord, Language};

const MAX_NAME_CHARS: usize = 30;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid filename pattern"));

/// Which languages go into each exported file, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioLayout {
    EnglishOnly,
    ArabicOnly,
    EnglishThenArabic,
    ArabicThenEnglish,
}

impl Default for AudioLayout {
    fn default() -> Self {
        Self::EnglishThenArabic
    }
}

impl AudioLayout {
    pub fn languages(self) -> &'static [Language] {
        match self {
            Self::EnglishOnly => &[Language::English],
            Self::ArabicOnly => &[Language::Arabic],
            Self::EnglishThenArabic => &[Language::English, Language::Arabic],
            Self::ArabicThenEnglish => &[Language::Arabic, Language::English],
        }
    }

    /// Suffix used by numbered file names.
    pub fn suffix(self) -> String {
        self.languages()
            .iter()
            .map(|language| language.name())
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// How exported files are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileNaming {
    /// `flashcard_01_english.mp3`
    Numbered,
    /// `hello_مرحبا.mp3`
    Text,
}

impl Default for FileNaming {
    fn default() -> Self {
        Self::Numbered
    }
}

/// Drop characters that are unsafe in file names and keep the first 30.
pub fn clean_for_filename(text: &str) -> String {
    UNSAFE_FILENAME_CHARS
        .replace_all(text, "")
        .chars()
        .take(MAX_NAME_CHARS)
        .collect()
}

/// File name for the card at 0-based `index`.
pub fn audio_file_name(
    index: usize,
    card: &FlashcardRecord,
    layout: AudioLayout,
    naming: FileNaming,
) -> String {
    match naming {
        FileNaming::Numbered => format!("flashcard_{:02}_{}.mp3", index + 1, layout.suffix()),
        FileNaming::Text => {
            let languages = layout.languages();
            let parts: Vec<String> = languages
                .iter()
                .map(|&language| clean_for_filename(card.text_in(language)))
                .collect();
            if languages.len() == 1 {
                format!("{}_{}.mp3", parts[0], languages[0].name())
            } else {
                format!("{}.mp3", parts.join("_"))
            }
        }
    }
}

/// Download name for a single card's combined audio.
pub fn combined_file_name(index: usize, layout: AudioLayout) -> String {
    format!("flashcard_{}_{}.mp3", index + 1, layout.suffix())
}

/// Archive name stamped with `timestamp`.
pub fn archive_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("flashcards_audio_{}.zip", timestamp.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn card() -> FlashcardRecord {
        FlashcardRecord::new("Hello, friend!", "مرحبا يا صديقي", "marhaban ya sadiqi")
    }

    #[test]
    fn numbered_names() {
        let card = card();
        assert_eq!(
            audio_file_name(0, &card, AudioLayout::EnglishOnly, FileNaming::Numbered),
            "flashcard_01_english.mp3"
        );
        assert_eq!(
            audio_file_name(11, &card, AudioLayout::ArabicThenEnglish, FileNaming::Numbered),
            "flashcard_12_arabic_english.mp3"
        );
        assert_eq!(
            audio_file_name(99, &card, AudioLayout::ArabicOnly, FileNaming::Numbered),
            "flashcard_100_arabic.mp3"
        );
    }

    #[test]
    fn text_names() {
        let card = card();
        assert_eq!(
            audio_file_name(0, &card, AudioLayout::EnglishOnly, FileNaming::Text),
            "Hello friend_english.mp3"
        );
        assert_eq!(
            audio_file_name(0, &card, AudioLayout::EnglishThenArabic, FileNaming::Text),
            "Hello friend_مرحبا يا صديقي.mp3"
        );
        assert_eq!(
            audio_file_name(0, &card, AudioLayout::ArabicThenEnglish, FileNaming::Text),
            "مرحبا يا صديقي_Hello friend.mp3"
        );
    }

    #[test]
    fn clean_truncates_to_thirty_chars() {
        let long = "a".repeat(40);
        assert_eq!(clean_for_filename(&long).chars().count(), 30);
        assert_eq!(clean_for_filename("what? (really) ok-ish"), "what really ok-ish");
    }

    #[test]
    fn combined_name() {
        assert_eq!(
            combined_file_name(0, AudioLayout::EnglishThenArabic),
            "flashcard_1_english_arabic.mp3"
        );
    }

    #[test]
    fn archive_name_uses_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(archive_name(&ts), "flashcards_audio_20240309_140507.zip");
    }
}
