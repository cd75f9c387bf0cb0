use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::{
    db::{CategoryFilter, Question},
    extractors::JsonBody,
    models::QuizRequest,
    names, quiz,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::QUIZZES_URL, post(next_question))
}

#[derive(Serialize)]
struct NextQuestionResponse {
    success: bool,
    question: Option<Question>,
}

/// Draws the next quiz question. An exhausted pool, or a category nobody has
/// heard of, both answer with `question: null`.
async fn next_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<QuizRequest>,
) -> Result<Json<NextQuestionResponse>, AppError> {
    let filter = CategoryFilter::from(body.quiz_category.id);

    let pool = state
        .db
        .quiz_pool(filter, &body.previous_questions)
        .await
        .reject_input("failed to load quiz pool")?;

    let question = quiz::pick(&pool, &mut rand::thread_rng());

    tracing::debug!(
        ?filter,
        previous = body.previous_questions.len(),
        pool = pool.len(),
        picked = ?question.as_ref().map(|q| q.id),
        "quiz draw"
    );

    Ok(Json(NextQuestionResponse {
        success: true,
        question,
    }))
}
