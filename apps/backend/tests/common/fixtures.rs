//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

use bilingual_flashcards_backend::models::FlashcardRecord;

/// Generate `n` distinct cards.
pub fn sample_cards(n: usize) -> Vec<FlashcardRecord> {
    (0..n)
        .map(|i| {
            FlashcardRecord::new(
                format!("Phrase {}", i + 1),
                format!("عبارة {}", i + 1),
                format!("ibara {}", i + 1),
            )
        })
        .collect()
}

/// Cards as they come out of a typical lesson document.
pub fn greeting_cards() -> Vec<FlashcardRecord> {
    vec![
        FlashcardRecord::new("Hello 👋", "مرحبا", "marhaban"),
        FlashcardRecord::new("Thank you", "شكرا", "shukran"),
        FlashcardRecord::new("Bye", "مع السلامة", "ma'a as-salama"),
    ]
}

/// Lesson text in the document format, one paragraph per line.
pub fn sample_document() -> String {
    [
        "Lesson 1: Greetings",
        "",
        "Teacher: Hello : [مرحبا] : marhaban",
        "Student: Hello to you : [أهلا بك] : ahlan bik",
        "a note without enough parts : here",
        "Teacher: Thank you : [شكرا] : shukran",
    ]
    .join("\n")
}

/// Body for POST /api/quiz/start.
pub fn start_quiz_request(mode: &str, count: Option<usize>) -> serde_json::Value {
    match count {
        Some(count) => json!({ "mode": mode, "count": count }),
        None => json!({ "mode": mode }),
    }
}

/// Body for POST /api/quiz/answer.
pub fn answer_request(quiz_id: Option<Uuid>, index: usize, answer: &str) -> serde_json::Value {
    json!({ "quiz_id": quiz_id, "index": index, "answer": answer })
}

/// Body for POST /api/quiz/skip.
pub fn skip_request(quiz_id: Option<Uuid>, index: usize) -> serde_json::Value {
    json!({ "quiz_id": quiz_id, "index": index })
}

/// Body for POST /api/playback/start.
pub fn playback_request(card_index: usize, language: &str) -> serde_json::Value {
    json!({ "card_index": card_index, "language": language })
}

/// Body for POST /api/export.
pub fn export_request(layout: &str, naming: &str) -> serde_json::Value {
    json!({ "layout": layout, "naming": naming })
}
