//! Quiz endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use flashcard_core::QuizSession;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::quiz::ActiveQuiz;
use crate::AppState;

/// Run `f` against the quiz in progress.
fn with_quiz<T>(state: &AppState, f: impl FnOnce(&mut ActiveQuiz) -> Result<T>) -> Result<T> {
    let mut guard = state.lock_quiz()?;
    let quiz = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("no quiz in progress".to_string()))?;
    f(quiz)
}

fn status_response(quiz: &ActiveQuiz) -> QuizStatusResponse {
    QuizStatusResponse {
        quiz_id: quiz.id,
        mode: quiz.session.mode(),
        progress: quiz.session.progress(),
        answered: quiz.session.answers().len(),
        current_answered: quiz.session.is_current_answered(),
    }
}

/// POST /api/quiz/start
pub async fn start(
    State(state): State<AppState>,
    Json(request): Json<StartQuizRequest>,
) -> Result<Json<QuizStatusResponse>> {
    let cards = state.deck.require_cards()?;
    let limits = state.limits;

    let count = match request.count {
        Some(count) if count == 0 || count > limits.max_questions => {
            return Err(ApiError::BadRequest(format!(
                "question count must be between 1 and {}",
                limits.max_questions
            )));
        }
        Some(count) => count,
        None => limits
            .default_questions
            .min(limits.max_questions)
            .min(cards.len())
            .max(1),
    };

    let quiz = ActiveQuiz::new(QuizSession::start(cards, request.mode, count)?);
    let response = status_response(&quiz);
    tracing::info!(
        "Started quiz {} with {} questions ({:?})",
        quiz.id,
        response.progress.total,
        request.mode
    );

    *state.lock_quiz()? = Some(quiz);
    Ok(Json(response))
}

/// GET /api/quiz
pub async fn status(State(state): State<AppState>) -> Result<Json<QuizStatusResponse>> {
    with_quiz(&state, |quiz| Ok(Json(status_response(quiz))))
}

/// GET /api/quiz/question
pub async fn question(State(state): State<AppState>) -> Result<Json<QuestionResponse>> {
    with_quiz(&state, |quiz| {
        let (view, choices) = quiz.current_question()?;
        let feedback = quiz
            .session
            .answers()
            .get(&view.index)
            .map(|answer| Feedback::new(&view, Some(answer.clone())));

        Ok(Json(QuestionResponse {
            quiz_id: quiz.id,
            index: view.index,
            direction: view.direction,
            prompt: view.prompt,
            choices,
            progress: quiz.session.progress(),
            feedback,
        }))
    })
}

/// GET /api/quiz/hint
///
/// Reveals the correct answer without recording anything.
pub async fn hint(State(state): State<AppState>) -> Result<Json<Feedback>> {
    with_quiz(&state, |quiz| {
        let (view, _) = quiz.current_question()?;
        let answer = quiz.session.answers().get(&view.index).cloned();
        Ok(Json(Feedback::new(&view, answer)))
    })
}

/// POST /api/quiz/answer
pub async fn answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<Feedback>> {
    with_quiz(&state, |quiz| {
        quiz.check_id(request.quiz_id)?;
        let (view, _) = quiz.current_question()?;

        let answer = SubmittedAnswer::Answer(request.answer);
        quiz.session.submit_answer(request.index, answer.clone())?;

        Ok(Json(Feedback::new(&view, Some(answer))))
    })
}

/// POST /api/quiz/skip
///
/// Records the question as skipped and moves on.
pub async fn skip(
    State(state): State<AppState>,
    Json(request): Json<SkipRequest>,
) -> Result<Json<QuizStatusResponse>> {
    with_quiz(&state, |quiz| {
        quiz.check_id(request.quiz_id)?;
        quiz.current_question()?;
        quiz.session
            .submit_answer(request.index, SubmittedAnswer::Skipped)?;
        quiz.session.advance();
        Ok(Json(status_response(quiz)))
    })
}

/// POST /api/quiz/next
pub async fn next(
    State(state): State<AppState>,
    Query(query): Query<QuizIdQuery>,
) -> Result<Json<QuizStatusResponse>> {
    with_quiz(&state, |quiz| {
        quiz.check_id(query.quiz_id)?;
        quiz.session.advance();
        Ok(Json(status_response(quiz)))
    })
}

/// POST /api/quiz/end
pub async fn end(
    State(state): State<AppState>,
    Query(query): Query<QuizIdQuery>,
) -> Result<Json<QuizStatusResponse>> {
    with_quiz(&state, |quiz| {
        quiz.check_id(query.quiz_id)?;
        quiz.session.terminate_early();
        tracing::info!("Quiz {} ended early", quiz.id);
        Ok(Json(status_response(quiz)))
    })
}

/// POST /api/quiz/retry
pub async fn retry(
    State(state): State<AppState>,
    Query(query): Query<QuizIdQuery>,
) -> Result<Json<QuizStatusResponse>> {
    with_quiz(&state, |quiz| {
        quiz.check_id(query.quiz_id)?;
        quiz.restart();
        Ok(Json(status_response(quiz)))
    })
}

/// GET /api/quiz/review
pub async fn review(State(state): State<AppState>) -> Result<Json<ReviewResponse>> {
    with_quiz(&state, |quiz| {
        let entries = quiz.session.review_log()?;
        Ok(Json(ReviewResponse {
            quiz_id: quiz.id,
            total: quiz.session.questions().len(),
            entries,
        }))
    })
}
