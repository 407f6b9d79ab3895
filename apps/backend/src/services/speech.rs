//! Speech synthesis through an external text-to-speech service.

use async_trait::async_trait;
use flashcard_core::{speech_text, split_for_synthesis, Language};
use reqwest::Client;
use thiserror::Error;

/// Longest text the translate endpoint accepts per request.
const MAX_CHUNK_CHARS: usize = 100;

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("speech request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("speech service returned status {0}")]
    Status(u16),
    #[error("speech service returned no audio")]
    Empty,
}

/// Turns text into MP3 audio.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, SynthesisError>;
}

/// Clean `text` for speech and synthesize it.
pub async fn speak(
    synth: &dyn SpeechSynthesizer,
    text: &str,
    language: Language,
) -> Result<Vec<u8>, SynthesisError> {
    synth.synthesize(&speech_text(text, language), language).await
}

/// Speak each `(text, language)` part in order and join the clips.
/// Fails if any part fails.
pub async fn speak_sequence(
    synth: &dyn SpeechSynthesizer,
    parts: &[(&str, Language)],
) -> Result<Vec<u8>, SynthesisError> {
    let mut audio = Vec::new();
    for (text, language) in parts {
        audio.extend(speak(synth, text, *language).await?);
    }
    Ok(audio)
}

/// Google Translate's public TTS endpoint, as used by gTTS.
pub struct GoogleTranslateTts {
    client: Client,
    base_url: String,
}

impl GoogleTranslateTts {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTts {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, SynthesisError> {
        let chunks = split_for_synthesis(text, MAX_CHUNK_CHARS);
        let total = chunks.len().to_string();
        let mut audio = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            let idx = idx.to_string();
            let textlen = chunk.chars().count().to_string();
            let response = self
                .client
                .get(&self.base_url)
                .query(&[
                    ("ie", "UTF-8"),
                    ("q", chunk.as_str()),
                    ("tl", language.tag()),
                    ("client", "tw-ob"),
                    ("total", total.as_str()),
                    ("idx", idx.as_str()),
                    ("textlen", textlen.as_str()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(SynthesisError::Status(status.as_u16()));
            }
            audio.extend_from_slice(&response.bytes().await?);
        }

        if audio.is_empty() {
            return Err(SynthesisError::Empty);
        }

        tracing::debug!(
            "Synthesized {} bytes of {} audio in {} request(s)",
            audio.len(),
            language.tag(),
            chunks.len()
        );
        Ok(audio)
    }
}
