//! Multiple-choice quiz sessions.
//!
//! A [`QuizSession`] is a plain value: the host keeps it between user actions
//! and calls the transition methods below. The engine keeps no score; it only
//! records what was chosen so the correct answer can be shown back.
//!
//! ```text
//! start ──► InProgress ──submit_answer/advance──► InProgress
//!               │                                    │
//!               └──terminate_early / advance past last──► Completed
//! ```

use std::collections::{BTreeMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::types::{
    Direction, DirectionMode, FlashcardRecord, Language, Progress, QuestionView, ReviewEntry,
    SubmittedAnswer,
};

/// Number of options offered per question.
pub const CHOICE_COUNT: usize = 4;

const DISTRACTOR_COUNT: usize = CHOICE_COUNT - 1;

/// Distractors used when the deck is too small to sample from.
pub fn fallback_distractors(language: Language) -> [&'static str; DISTRACTOR_COUNT] {
    match language {
        Language::Arabic => ["نَعَم", "لا", "شُكْرًا"],
        Language::English => ["Yes", "No", "Thank you"],
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;

/// State of one quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    mode: DirectionMode,
    questions: Vec<FlashcardRecord>,
    /// Full deck at start time, sampled for distractors.
    pool: Vec<FlashcardRecord>,
    current_index: usize,
    answers: BTreeMap<usize, SubmittedAnswer>,
    per_question_direction: BTreeMap<usize, Direction>,
    completed: bool,
}

impl QuizSession {
    /// Start a quiz of up to `count` questions drawn from `cards`.
    ///
    /// A deck no larger than `count` is used whole, in order. Otherwise the
    /// questions are sampled from the distinct cards, so a line repeated in
    /// the document is asked at most once. When there are no more than
    /// `count` distinct cards, each of them is asked once in deck order.
    pub fn start(cards: &[FlashcardRecord], mode: DirectionMode, count: usize) -> Result<Self> {
        Self::start_with_rng(cards, mode, count, &mut rand::thread_rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(
        cards: &[FlashcardRecord],
        mode: DirectionMode,
        count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if cards.is_empty() {
            return Err(QuizError::EmptyCardSet);
        }
        if count == 0 {
            return Err(QuizError::ZeroCount);
        }

        let questions = if cards.len() <= count {
            cards.to_vec()
        } else {
            let mut seen = HashSet::new();
            let distinct: Vec<&FlashcardRecord> =
                cards.iter().filter(|card| seen.insert(*card)).collect();
            if distinct.len() <= count {
                distinct.into_iter().cloned().collect()
            } else {
                distinct
                    .choose_multiple(rng, count)
                    .map(|card| (*card).clone())
                    .collect()
            }
        };

        Ok(Self {
            mode,
            questions,
            pool: cards.to_vec(),
            current_index: 0,
            answers: BTreeMap::new(),
            per_question_direction: BTreeMap::new(),
            completed: false,
        })
    }

    pub fn mode(&self) -> DirectionMode {
        self.mode
    }

    pub fn questions(&self) -> &[FlashcardRecord] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &BTreeMap<usize, SubmittedAnswer> {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the current question already has an answer or skip recorded.
    pub fn is_current_answered(&self) -> bool {
        self.answers.contains_key(&self.current_index)
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        let percent = if total == 0 {
            0
        } else {
            (self.current_index * 100 / total) as u32
        };
        Progress {
            question_number: self.current_index + 1,
            total,
            percent,
            completed: self.completed,
        }
    }

    /// Show the current question. In mixed mode the direction is flipped once
    /// per question and reused on every later call.
    pub fn present_question(&mut self) -> Result<QuestionView> {
        self.present_question_with_rng(&mut rand::thread_rng())
    }

    pub fn present_question_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<QuestionView> {
        if self.completed {
            return Err(QuizError::Completed);
        }

        let index = self.current_index;
        self.card(index)?;
        let mode = self.mode;
        let direction = *self
            .per_question_direction
            .entry(index)
            .or_insert_with(|| match mode.fixed() {
                Some(direction) => direction,
                None if rng.gen_bool(0.5) => Direction::TermToTranslation,
                None => Direction::TranslationToTerm,
            });

        let card = self.card(index)?;
        Ok(QuestionView {
            index,
            direction,
            prompt: card.prompt(direction).to_string(),
            correct_answer: card.answer(direction).to_string(),
            transliteration: card.transliteration.clone(),
        })
    }

    /// Four shuffled options for the current question: `correct` plus three
    /// distractors taken from other cards, or the built-in fallback words when
    /// fewer than three other cards exist.
    pub fn build_choices(&self, correct: &str, direction: Direction) -> Vec<String> {
        self.build_choices_with_rng(correct, direction, &mut rand::thread_rng())
    }

    pub fn build_choices_with_rng<R: Rng + ?Sized>(
        &self,
        correct: &str,
        direction: Direction,
        rng: &mut R,
    ) -> Vec<String> {
        let current = self.questions.get(self.current_index);
        let others: Vec<&FlashcardRecord> = self
            .pool
            .iter()
            .filter(|card| Some(*card) != current)
            .collect();

        let mut options = Vec::with_capacity(CHOICE_COUNT);
        options.push(correct.to_string());

        if others.len() >= DISTRACTOR_COUNT {
            options.extend(
                others
                    .choose_multiple(rng, DISTRACTOR_COUNT)
                    .map(|card| card.answer(direction).to_string()),
            );
        } else {
            options.extend(
                fallback_distractors(direction.answer_language())
                    .iter()
                    .map(|s| s.to_string()),
            );
        }

        options.shuffle(rng);
        options
    }

    /// Record an answer (or a skip) for the current question. Does not move on.
    pub fn submit_answer(&mut self, index: usize, answer: SubmittedAnswer) -> Result<()> {
        if self.completed {
            return Err(QuizError::Completed);
        }
        if index != self.current_index {
            return Err(QuizError::IndexMismatch {
                expected: self.current_index,
                got: index,
            });
        }
        if self.answers.contains_key(&index) {
            return Err(QuizError::AlreadyAnswered(index));
        }

        self.answers.insert(index, answer);
        Ok(())
    }

    /// Move to the next question, completing the quiz after the last one.
    pub fn advance(&mut self) {
        if self.completed {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        } else {
            self.completed = true;
        }
    }

    /// End the quiz now. Unanswered questions stay out of the review.
    pub fn terminate_early(&mut self) {
        self.completed = true;
    }

    /// Retake the same questions from the beginning.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.answers.clear();
        self.per_question_direction.clear();
        self.completed = false;
    }

    /// Answered and skipped questions in order.
    pub fn review_log(&self) -> Result<Vec<ReviewEntry>> {
        if !self.completed {
            return Err(QuizError::NotCompleted);
        }

        self.answers
            .iter()
            .map(|(&index, answer)| {
                let card = self.card(index)?;
                let direction = self.direction_for(index);
                Ok(ReviewEntry {
                    index,
                    question: card.prompt(direction).to_string(),
                    user_answer: answer.clone(),
                    correct_answer: card.answer(direction).to_string(),
                    direction,
                    transliteration: card.transliteration.clone(),
                })
            })
            .collect()
    }

    /// Question at `index`. A session restored from storage may point past
    /// its questions.
    fn card(&self, index: usize) -> Result<&FlashcardRecord> {
        self.questions
            .get(index)
            .ok_or(QuizError::QuestionOutOfRange {
                index,
                total: self.questions.len(),
            })
    }

    fn direction_for(&self, index: usize) -> Direction {
        self.per_question_direction
            .get(&index)
            .copied()
            .or_else(|| self.mode.fixed())
            .unwrap_or_default()
    }
}
