pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{get, post},
    Router,
};
use flashcard_core::PlaybackState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, QuizLimits};
use crate::error::{ApiError, Result};
use crate::services::deck::Deck;
use crate::services::quiz::ActiveQuiz;
use crate::services::speech::{GoogleTranslateTts, SpeechSynthesizer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deck: Arc<Deck>,
    pub quiz: Arc<Mutex<Option<ActiveQuiz>>>,
    pub playback: Arc<Mutex<PlaybackState>>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub limits: QuizLimits,
}

impl AppState {
    pub fn new(deck: Deck, speech: Arc<dyn SpeechSynthesizer>, limits: QuizLimits) -> Self {
        Self {
            deck: Arc::new(deck),
            quiz: Arc::new(Mutex::new(None)),
            playback: Arc::new(Mutex::new(PlaybackState::new())),
            speech,
            limits,
        }
    }

    pub fn lock_quiz(&self) -> Result<MutexGuard<'_, Option<ActiveQuiz>>> {
        self.quiz
            .lock()
            .map_err(|_| ApiError::Internal("quiz state lock poisoned".to_string()))
    }

    pub fn lock_playback(&self) -> Result<MutexGuard<'_, PlaybackState>> {
        self.playback
            .lock()
            .map_err(|_| ApiError::Internal("playback state lock poisoned".to_string()))
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading flashcards from {}...", config.doc_path.display());
    let deck = Deck::load(&config.doc_path);

    let speech = Arc::new(GoogleTranslateTts::new(config.tts_base_url.clone()));
    let state = AppState::new(deck, speech, config.quiz);

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the full router around `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/status", get(routes::status::status))
        .route("/api/reset", post(routes::status::reset))
        // Card routes
        .route("/api/cards", get(routes::cards::list))
        .route("/api/cards/{index}", get(routes::cards::show))
        .route("/api/cards/{index}/audio", get(routes::audio::card_audio))
        .route(
            "/api/cards/{index}/audio/combined",
            get(routes::audio::combined_audio),
        )
        // Playback routes
        .route("/api/playback", get(routes::playback::current))
        .route("/api/playback/start", post(routes::playback::start))
        .route("/api/playback/stop", post(routes::playback::stop))
        // Quiz routes
        .route("/api/quiz", get(routes::quiz::status))
        .route("/api/quiz/start", post(routes::quiz::start))
        .route("/api/quiz/question", get(routes::quiz::question))
        .route("/api/quiz/hint", get(routes::quiz::hint))
        .route("/api/quiz/answer", post(routes::quiz::answer))
        .route("/api/quiz/skip", post(routes::quiz::skip))
        .route("/api/quiz/next", post(routes::quiz::next))
        .route("/api/quiz/end", post(routes::quiz::end))
        .route("/api/quiz/retry", post(routes::quiz::retry))
        .route("/api/quiz/review", get(routes::quiz::review))
        // Export routes
        .route("/api/export", post(routes::export::export))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
