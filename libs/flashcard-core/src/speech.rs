//! Text preparation for speech synthesis.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Language;

static SYMBOLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}",
        r"\x{1F300}-\x{1F5FF}",
        r"\x{1F680}-\x{1F6FF}",
        r"\x{1F1E0}-\x{1F1FF}",
        r"\x{2500}-\x{2BEF}",
        r"\x{2702}-\x{27B0}",
        r"\x{24C2}-\x{1F251}",
        r"\x{1F926}-\x{1F937}",
        r"\x{10000}-\x{10FFFF}",
        r"\x{2640}-\x{2642}",
        r"\x{2600}-\x{2B55}",
        r"\x{200D}",
        r"\x{23CF}",
        r"\x{23E9}",
        r"\x{231A}",
        r"\x{FE0F}",
        r"\x{3030}",
        "]+",
    ))
    .expect("valid symbol pattern")
});

/// Spoken instead of an empty string.
pub fn placeholder(language: Language) -> &'static str {
    match language {
        Language::English => "No text available",
        Language::Arabic => "لا يوجد نص",
    }
}

/// Remove emoji and pictographs, then collapse whitespace.
pub fn strip_symbols(text: &str) -> String {
    let without = SYMBOLS.replace_all(text, "");
    without.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text to hand to the speech service for `text` in `language`.
pub fn speech_text(text: &str, language: Language) -> String {
    let clean = strip_symbols(text);
    if clean.is_empty() {
        placeholder(language).to_string()
    } else {
        clean
    }
}

/// Split `text` at whitespace into chunks of at most `max_chars` characters.
/// Words longer than the limit are cut.
pub fn split_for_synthesis(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if current_len > 0 {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            chunks.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        chunks.push(current);
    }
    chunks
}
