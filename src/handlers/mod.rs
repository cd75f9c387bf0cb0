mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use axum::Router;
use serde::Serialize;

use crate::{
    db::{Question, Repository},
    quiz,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(categories::routes())
        .merge(questions::routes())
        .merge(quizzes::routes())
}

/// One page of a question listing plus the size of the whole listing.
#[derive(Serialize)]
struct QuestionPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<BTreeMap<i32, String>>,
    current_category: Option<i32>,
}

impl QuestionPage {
    fn new(all: &[Question], page: i64, current_category: Option<i32>) -> Self {
        Self {
            success: true,
            questions: quiz::paginate(all, page).to_vec(),
            total_questions: all.len(),
            categories: None,
            current_category,
        }
    }

    /// Listings that should answer 404 when the requested page has nothing on it.
    fn non_empty(self) -> Result<Self, AppError> {
        if self.questions.is_empty() {
            return Err(AppError::NotFound);
        }
        Ok(self)
    }
}

async fn category_map(db: &dyn Repository) -> Result<BTreeMap<i32, String>, AppError> {
    let categories = db
        .categories()
        .await
        .reject("could not get categories")?;

    Ok(categories.into_iter().map(|c| (c.id, c.label)).collect())
}
