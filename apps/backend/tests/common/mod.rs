//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the app around an in-memory deck
//! - FakeSpeech, a synthesizer that echoes its input instead of calling out
//! - Helper functions for creating test data

#![allow(dead_code)]

pub mod fixtures;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;

use bilingual_flashcards_backend::build_router;
use bilingual_flashcards_backend::config::QuizLimits;
use bilingual_flashcards_backend::models::{FlashcardRecord, Language};
use bilingual_flashcards_backend::services::deck::Deck;
use bilingual_flashcards_backend::services::speech::{SpeechSynthesizer, SynthesisError};
use bilingual_flashcards_backend::AppState;

/// Synthesizer returning `"{tag}:{text}|"` as the audio bytes.
#[derive(Default)]
pub struct FakeSpeech {
    /// Text containing this fails with a 503.
    fail_on: Option<String>,
    calls: Mutex<Vec<(String, Language)>>,
}

impl FakeSpeech {
    pub fn failing_on(text: &str) -> Self {
        Self {
            fail_on: Some(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every `(text, language)` the service was asked to say.
    pub fn calls(&self) -> Vec<(String, Language)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSpeech {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, SynthesisError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), language));

        if let Some(fail_on) = &self.fail_on {
            if text.contains(fail_on.as_str()) {
                return Err(SynthesisError::Status(503));
            }
        }
        Ok(format!("{}:{}|", language.tag(), text).into_bytes())
    }
}

/// Test context holding the app state and the fake speech service.
pub struct TestContext {
    pub state: AppState,
    pub speech: Arc<FakeSpeech>,
    app: Router,
}

impl TestContext {
    /// Context with `cards` loaded.
    pub fn new(cards: Vec<FlashcardRecord>) -> Self {
        Self::with_deck(Deck::from_cards(cards, "test.docx"), FakeSpeech::default())
    }

    /// Context with the sample deck loaded.
    pub fn sample() -> Self {
        Self::new(fixtures::sample_cards(6))
    }

    /// Context whose speech service fails for text containing `text`.
    pub fn failing_speech(cards: Vec<FlashcardRecord>, text: &str) -> Self {
        Self::with_deck(
            Deck::from_cards(cards, "test.docx"),
            FakeSpeech::failing_on(text),
        )
    }

    pub fn with_deck(deck: Deck, speech: FakeSpeech) -> Self {
        let speech = Arc::new(speech);
        let state = AppState::new(deck, speech.clone(), QuizLimits::default());
        let app = build_router(state.clone());
        Self { state, speech, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
