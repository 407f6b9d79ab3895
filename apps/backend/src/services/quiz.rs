//! The quiz attempt held between requests.

use flashcard_core::{QuestionView, QuizSession};
use uuid::Uuid;

use crate::error::{ApiError, Result};

/// A running quiz plus the options already shown for its current question.
#[derive(Debug, Clone)]
pub struct ActiveQuiz {
    pub id: Uuid,
    pub session: QuizSession,
    choices: Option<(usize, Vec<String>)>,
}

impl ActiveQuiz {
    pub fn new(session: QuizSession) -> Self {
        Self {
            id: Uuid::new_v4(),
            session,
            choices: None,
        }
    }

    /// Reject requests aimed at an earlier attempt.
    pub fn check_id(&self, id: Option<Uuid>) -> Result<()> {
        match id {
            Some(id) if id != self.id => Err(ApiError::Conflict(format!(
                "quiz {} is no longer active",
                id
            ))),
            _ => Ok(()),
        }
    }

    /// Present the current question with its options. Options are drawn once
    /// per question so reloading shows the same order.
    pub fn current_question(&mut self) -> Result<(QuestionView, Vec<String>)> {
        let view = self.session.present_question()?;

        let choices = match &self.choices {
            Some((index, choices)) if *index == view.index => choices.clone(),
            _ => {
                let choices = self
                    .session
                    .build_choices(&view.correct_answer, view.direction);
                self.choices = Some((view.index, choices.clone()));
                choices
            }
        };

        Ok((view, choices))
    }

    /// Retake the same questions.
    pub fn restart(&mut self) {
        self.session.restart();
        self.choices = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcard_core::{DirectionMode, FlashcardRecord, SubmittedAnswer};

    fn quiz() -> ActiveQuiz {
        let cards: Vec<_> = (0..6)
            .map(|i| FlashcardRecord::new(format!("term {i}"), format!("ar {i}"), format!("tr {i}")))
            .collect();
        ActiveQuiz::new(QuizSession::start(&cards, DirectionMode::Mixed, 6).unwrap())
    }

    #[test]
    fn choices_are_stable_for_a_question() {
        let mut quiz = quiz();
        let (first_view, first) = quiz.current_question().unwrap();
        for _ in 0..5 {
            let (view, choices) = quiz.current_question().unwrap();
            assert_eq!(view, first_view);
            assert_eq!(choices, first);
        }
    }

    #[test]
    fn choices_change_with_question() {
        let mut quiz = quiz();
        let (view, _) = quiz.current_question().unwrap();
        quiz.session
            .submit_answer(view.index, SubmittedAnswer::Skipped)
            .unwrap();
        quiz.session.advance();
        let (next, choices) = quiz.current_question().unwrap();
        assert_eq!(next.index, 1);
        assert!(choices.contains(&next.correct_answer));
    }

    #[test]
    fn stale_id_is_rejected() {
        let quiz = quiz();
        assert!(quiz.check_id(None).is_ok());
        assert!(quiz.check_id(Some(quiz.id)).is_ok());
        assert!(matches!(
            quiz.check_id(Some(Uuid::new_v4())),
            Err(ApiError::Conflict(_))
        ));
    }
}
