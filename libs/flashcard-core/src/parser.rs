//! Parser for bilingual flashcard paragraphs.
//!
//! # Format
//! ```text
//! Teacher: Hello : [مرحبا] : marhaban
//! Student: Thank you : [شكرا] : shukran
//! ```
//!
//! Segments are separated by `" : "`. The first is the English term (an
//! optional `Student:`/`Teacher:` prefix is dropped), the second holds the
//! Arabic translation, preferably inside brackets, and the third is the
//! transliteration. Lines with fewer than three segments are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::FlashcardRecord;

const DELIMITER: &str = " : ";

static ROLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Student|Teacher):\s*").expect("valid role prefix pattern"));

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("valid bracket pattern"));

/// Parse paragraphs into flashcards, preserving input order.
pub fn parse<I, S>(paragraphs: I) -> Vec<FlashcardRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paragraphs
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}

/// Parse plain text, treating every line as a paragraph.
pub fn parse_text(content: &str) -> Vec<FlashcardRecord> {
    parse(content.lines())
}

/// Parse a single paragraph. Returns `None` for blank or malformed lines.
pub fn parse_line(line: &str) -> Option<FlashcardRecord> {
    let text = line.trim();
    if text.is_empty() {
        return None;
    }

    let mut parts = text.split(DELIMITER);
    let (term_raw, translation_raw, transliteration_raw) =
        (parts.next()?, parts.next()?, parts.next()?);

    let term = ROLE_PREFIX.replace(term_raw.trim(), "").trim().to_string();

    let translation_raw = translation_raw.trim();
    let translation = BRACKETED
        .captures(translation_raw)
        .and_then(|caps| caps.get(1))
        .map_or(translation_raw, |m| m.as_str())
        .to_string();

    Some(FlashcardRecord {
        term,
        translation,
        transliteration: transliteration_raw.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_teacher_line() {
        let cards = parse(["Teacher: Hello : [مرحبا] : marhaban"]);
        assert_eq!(cards, vec![FlashcardRecord::new("Hello", "مرحبا", "marhaban")]);
    }

    #[test]
    fn parse_student_prefix() {
        let card = parse_line("Student:   Good morning : [صباح الخير] : sabah al-khayr").unwrap();
        assert_eq!(card.term, "Good morning");
        assert_eq!(card.translation, "صباح الخير");
    }

    #[test]
    fn role_prefix_is_case_sensitive() {
        let card = parse_line("teacher: Hello : [مرحبا] : marhaban").unwrap();
        assert_eq!(card.term, "teacher: Hello");
    }

    #[test]
    fn role_prefix_only_at_start() {
        let card = parse_line("Ask the Teacher: please : [من فضلك] : min fadlak").unwrap();
        assert_eq!(card.term, "Ask the Teacher: please");
    }

    #[test]
    fn translation_without_brackets_is_kept_whole() {
        let card = parse_line("Hello : marhaba : marhaba").unwrap();
        assert_eq!(card.translation, "marhaba");
    }

    #[test]
    fn translation_uses_first_bracket_pair() {
        let card = parse_line("Yes : (formal) [نعم] or [أجل] : na'am").unwrap();
        assert_eq!(card.translation, "نعم");
    }

    #[test]
    fn empty_brackets_give_empty_translation() {
        let card = parse_line("Hello : [] : marhaban").unwrap();
        assert_eq!(card.translation, "");
    }

    #[test]
    fn malformed_lines_are_dropped() {
        let cards = parse(["", "only one part", "a : b : c : d"]);
        assert_eq!(cards, vec![FlashcardRecord::new("a", "b", "c")]);
    }

    #[test]
    fn malformed_line_does_not_stop_later_lines() {
        let cards = parse([
            "Hello : [مرحبا] : marhaban",
            "two : parts",
            "   ",
            "Thanks : [شكرا] : shukran",
        ]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].term, "Thanks");
    }

    #[test]
    fn colon_without_spaces_is_not_a_delimiter() {
        assert_eq!(parse_line("a:b:c"), None);
        assert_eq!(parse_line("a : b:c"), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let card = parse_line("  Hello  :  [مرحبا]  :  marhaban  ").unwrap();
        assert_eq!(card, FlashcardRecord::new("Hello", "مرحبا", "marhaban"));
    }

    #[test]
    fn parse_preserves_order_and_duplicates() {
        let text = "b : [ب] : ba\na : [أ] : alif\nb : [ب] : ba";
        let cards = parse_text(text);
        let terms: Vec<_> = cards.iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, vec!["b", "a", "b"]);
    }

    #[test]
    fn parse_is_deterministic() {
        let text = "Teacher: Hello : [مرحبا] : marhaban\nnoise\nStudent: Bye : [مع السلامة] : ma'a as-salama";
        assert_eq!(parse_text(text), parse_text(text));
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_text("").is_empty());
    }
}
