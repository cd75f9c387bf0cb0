use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use super::{category_map, QuestionPage};
use crate::{
    extractors::{JsonBody, Page},
    models::{NewQuestion, QuestionRequest},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            names::QUESTIONS_URL,
            get(list_questions).post(create_or_search),
        )
        .route(names::QUESTION_URL, delete(delete_question))
}

async fn list_questions(
    State(state): State<AppState>,
    Page(page): Page,
) -> Result<Json<QuestionPage>, AppError> {
    let (categories, questions) = tokio::try_join!(category_map(state.db.as_ref()), async {
        state
            .db
            .questions()
            .await
            .reject("could not get questions")
    })?;

    let mut listing = QuestionPage::new(&questions, page, None).non_empty()?;
    listing.categories = Some(categories);
    Ok(Json(listing))
}

#[derive(Serialize)]
#[serde(untagged)]
enum QuestionsPostResponse {
    Created { success: bool, created: i32 },
    Found(QuestionPage),
}

async fn create_or_search(
    State(state): State<AppState>,
    Page(page): Page,
    JsonBody(body): JsonBody<QuestionRequest>,
) -> Result<Json<QuestionsPostResponse>, AppError> {
    match body {
        QuestionRequest::Search(search) => {
            let questions = state
                .db
                .search_questions(&search.search_term)
                .await
                .reject_input("failed to search questions")?;

            tracing::debug!(
                term = %search.search_term,
                matches = questions.len(),
                "question search"
            );

            // An empty result is still a successful search
            Ok(Json(QuestionsPostResponse::Found(QuestionPage::new(
                &questions,
                page,
                Some(names::ALL_CATEGORIES),
            ))))
        }
        QuestionRequest::Create(question) => {
            let created = create_question(&state, question).await?;
            Ok(Json(QuestionsPostResponse::Created {
                success: true,
                created,
            }))
        }
    }
}

async fn create_question(state: &AppState, question: NewQuestion) -> Result<i32, AppError> {
    question.validate().map_err(AppError::Unprocessable)?;

    state
        .db
        .insert_question(&question)
        .await
        .reject_input("failed to create question")
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i32,
}

async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let question_id: i32 = question_id
        .parse()
        .map_err(|_| AppError::Unprocessable("question id is not an integer"))?;

    let question = state
        .db
        .question(question_id)
        .await
        .reject_input("failed to look up question")?
        .ok_or(AppError::Unprocessable("question does not exist"))?;

    let removed = state
        .db
        .delete_question(question.id)
        .await
        .reject_input("failed to delete question")?;
    if !removed {
        return Err(AppError::Unprocessable("question was already deleted"));
    }

    tracing::info!(
        id = question.id,
        category = question.category,
        "question deleted"
    );
    Ok(Json(DeletedResponse {
        success: true,
        deleted: question.id,
    }))
}
