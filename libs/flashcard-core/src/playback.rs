//! Which audio clip is currently looping.

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Identifies a looping clip: one card spoken in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaybackId {
    pub card_index: usize,
    pub language: Language,
}

impl PlaybackId {
    pub fn new(card_index: usize, language: Language) -> Self {
        Self {
            card_index,
            language,
        }
    }
}

/// At most one clip plays at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    active: Option<PlaybackId>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start looping `id`, replacing any clip already playing.
    /// Returns the clip that was stopped, if any.
    pub fn start(&mut self, id: PlaybackId) -> Option<PlaybackId> {
        self.active.replace(id).filter(|previous| *previous != id)
    }

    /// Stop whatever is playing.
    pub fn stop(&mut self) -> Option<PlaybackId> {
        self.active.take()
    }

    pub fn active(&self) -> Option<PlaybackId> {
        self.active
    }

    pub fn is_playing(&self, id: PlaybackId) -> bool {
        self.active == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let state = PlaybackState::new();
        assert_eq!(state.active(), None);
    }

    #[test]
    fn start_replaces_previous_clip() {
        let mut state = PlaybackState::new();
        let english = PlaybackId::new(0, Language::English);
        let arabic = PlaybackId::new(0, Language::Arabic);

        assert_eq!(state.start(english), None);
        assert_eq!(state.start(arabic), Some(english));
        assert!(state.is_playing(arabic));
        assert!(!state.is_playing(english));
    }

    #[test]
    fn restarting_same_clip_reports_nothing_stopped() {
        let mut state = PlaybackState::new();
        let id = PlaybackId::new(3, Language::Arabic);
        state.start(id);
        assert_eq!(state.start(id), None);
        assert!(state.is_playing(id));
    }

    #[test]
    fn stop_clears_active_clip() {
        let mut state = PlaybackState::new();
        let id = PlaybackId::new(1, Language::English);
        state.start(id);
        assert_eq!(state.stop(), Some(id));
        assert_eq!(state.active(), None);
        assert_eq!(state.stop(), None);
    }
}
