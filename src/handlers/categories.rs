use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{category_map, QuestionPage};
use crate::{
    extractors::Page,
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CATEGORIES_URL, get(list_categories))
        .route(names::CATEGORY_QUESTIONS_URL, get(category_questions))
}

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i32, String>,
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = category_map(state.db.as_ref()).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

async fn category_questions(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Page(page): Page,
) -> Result<Json<QuestionPage>, AppError> {
    // A non-numeric id names no category, same as an unknown one
    let category_id: i32 = category_id.parse().map_err(|_| AppError::NotFound)?;

    let questions = state
        .db
        .questions_in_category(category_id)
        .await
        .reject("could not get questions for category")?;

    QuestionPage::new(&questions, page, Some(category_id))
        .non_empty()
        .map(Json)
}
