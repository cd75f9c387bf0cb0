use color_eyre::Result;

use super::models::{CategoryFilter, Question};
use super::Db;
use crate::models::NewQuestion;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Escapes LIKE wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl Db {
    pub(super) async fn all_questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY difficulty, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub(super) async fn questions_matching(&self, term: &str) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            r"SELECT {QUESTION_COLUMNS} FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY difficulty, id"
        ))
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub(super) async fn questions_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY difficulty, id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub(super) async fn unseen_questions(
        &self,
        filter: CategoryFilter,
        previous: &[i32],
    ) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            r#"
            SELECT {QUESTION_COLUMNS} FROM questions
            WHERE ($1::INT IS NULL OR category = $1)
              AND NOT (id = ANY($2::INT4[]))
            ORDER BY id
            "#
        ))
        .bind(filter.category_id())
        .bind(previous)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub(super) async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub(super) async fn create_question(&self, question: &NewQuestion) -> Result<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO questions (question, answer, difficulty, category) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.difficulty)
        .bind(question.category)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(id, category = question.category, "question created");
        Ok(id)
    }

    pub(super) async fn remove_question(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
