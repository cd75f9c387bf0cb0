#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use color_eyre::{eyre::eyre, Result};
use serde_json::Value;
use tower::ServiceExt;
use trivia_api::{
    db::{Category, CategoryFilter, Db, MemoryDb, Question, Repository},
    models::NewQuestion,
    router, AppState,
};

pub fn new_question(question: &str, difficulty: i32, category: i32) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        answer: format!("answer to {question}"),
        difficulty,
        category,
    }
}

/// Seeded categories plus `n` questions spread over Science, Geography and History.
pub async fn populated_db(n: usize) -> MemoryDb {
    let db = MemoryDb::seeded();
    for i in 0..n {
        let category = [1, 3, 4][i % 3];
        let difficulty = (i % 5) as i32 + 1;
        db.insert_question(&new_question(&format!("What is fact {}?", i + 1), difficulty, category))
            .await
            .expect("seed question");
    }
    db
}

/// A store whose every call fails, as if the database were unreachable.
pub struct UnreachableDb;

#[async_trait]
impl Repository for UnreachableDb {
    async fn categories(&self) -> Result<Vec<Category>> {
        Err(eyre!("connection refused"))
    }

    async fn questions(&self) -> Result<Vec<Question>> {
        Err(eyre!("connection refused"))
    }

    async fn search_questions(&self, _term: &str) -> Result<Vec<Question>> {
        Err(eyre!("connection refused"))
    }

    async fn questions_in_category(&self, _category_id: i32) -> Result<Vec<Question>> {
        Err(eyre!("connection refused"))
    }

    async fn quiz_pool(&self, _filter: CategoryFilter, _previous: &[i32]) -> Result<Vec<Question>> {
        Err(eyre!("connection refused"))
    }

    async fn question(&self, _id: i32) -> Result<Option<Question>> {
        Err(eyre!("connection refused"))
    }

    async fn insert_question(&self, _question: &NewQuestion) -> Result<i32> {
        Err(eyre!("connection refused"))
    }

    async fn delete_question(&self, _id: i32) -> Result<bool> {
        Err(eyre!("connection refused"))
    }
}

pub fn app(db: impl Repository) -> Router {
    router(AppState::new(db))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    match body {
        Some(json) => send_raw(app, method, uri, Some("application/json"), json.to_string()).await,
        None => send_raw(app, method, uri, None, String::new()).await,
    }
}

/// Sends `body` as-is, with `content_type` if given, and parses the JSON reply.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        req = req.header("content-type", content_type);
    }

    let resp = app
        .clone()
        .oneshot(req.body(Body::from(body)).expect("request build should succeed"))
        .await
        .expect("router should respond");

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = serde_json::from_slice(&bytes).expect("response should be json");
    (status, json)
}

/// PostgreSQL store for tests, or `None` when `TEST_DATABASE_URL` is unset.
pub async fn create_test_db() -> Option<Db> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    Some(Db::new(&url, 2).await.expect("failed to create test database"))
}
