//! Runtime configuration from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_DOC_PATH: &str = "Flash Card Text.docx";
pub const DEFAULT_TTS_BASE_URL: &str = "https://translate.google.com/translate_tts";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Bounds on quiz length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizLimits {
    /// Questions asked when the request does not say.
    pub default_questions: usize,
    pub max_questions: usize,
}

impl Default for QuizLimits {
    fn default() -> Self {
        Self {
            default_questions: 10,
            max_questions: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub doc_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub tts_base_url: String,
    pub quiz: QuizLimits,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Env vars (all optional):
    /// - FLASHCARDS_DOC: Source document, `.docx` or plain text
    /// - HOST / PORT: Listen address
    /// - TTS_BASE_URL: Speech endpoint
    /// - QUIZ_DEFAULT_QUESTIONS / QUIZ_MAX_QUESTIONS: Quiz length bounds
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = QuizLimits::default();
        let quiz = QuizLimits {
            default_questions: parse_var("QUIZ_DEFAULT_QUESTIONS", defaults.default_questions)?,
            max_questions: parse_var("QUIZ_MAX_QUESTIONS", defaults.max_questions)?,
        };
        if quiz.max_questions == 0 {
            return Err(ConfigError::Invalid {
                key: "QUIZ_MAX_QUESTIONS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            doc_path: std::env::var("FLASHCARDS_DOC")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DOC_PATH)),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 3000)?,
            tts_base_url: std::env::var("TTS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TTS_BASE_URL.to_string()),
            quiz,
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}
