use std::collections::BTreeMap;

use async_trait::async_trait;
use color_eyre::{eyre::eyre, Result};
use parking_lot::RwLock;

use super::models::{Category, CategoryFilter, Question};
use super::Repository;
use crate::{models::NewQuestion, names, quiz};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, String>,
    questions: BTreeMap<i32, Question>,
    next_id: i32,
}

/// In-process question store with the same ordering and integrity rules as [`super::Db`].
#[derive(Default)]
pub struct MemoryDb {
    tables: RwLock<Tables>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the default category set and no questions.
    pub fn seeded() -> Self {
        Self::with_categories(names::DEFAULT_CATEGORIES.iter().copied())
    }

    pub fn with_categories<'a>(categories: impl IntoIterator<Item = (i32, &'a str)>) -> Self {
        let db = Self::new();
        {
            let mut tables = db.tables.write();
            for (id, label) in categories {
                tables.categories.insert(id, label.to_string());
            }
        }
        db
    }

    /// Questions matching `keep`, by difficulty then id.
    fn select(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        let tables = self.tables.read();
        let mut questions: Vec<Question> = tables
            .questions
            .values()
            .filter(|q| keep(q))
            .cloned()
            .collect();
        questions.sort_by_key(|q| (q.difficulty, q.id));
        questions
    }
}

#[async_trait]
impl Repository for MemoryDb {
    async fn categories(&self) -> Result<Vec<Category>> {
        let tables = self.tables.read();
        Ok(tables
            .categories
            .iter()
            .map(|(&id, label)| Category {
                id,
                label: label.clone(),
            })
            .collect())
    }

    async fn questions(&self) -> Result<Vec<Question>> {
        Ok(self.select(|_| true))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let term = term.to_lowercase();
        Ok(self.select(|q| q.question.to_lowercase().contains(&term)))
    }

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>> {
        Ok(self.select(|q| q.category == category_id))
    }

    async fn quiz_pool(&self, filter: CategoryFilter, previous: &[i32]) -> Result<Vec<Question>> {
        let tables = self.tables.read();
        Ok(tables
            .questions
            .values()
            .filter(|q| quiz::is_eligible(q, filter, previous))
            .cloned()
            .collect())
    }

    async fn question(&self, id: i32) -> Result<Option<Question>> {
        Ok(self.tables.read().questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<i32> {
        let mut tables = self.tables.write();
        if !tables.categories.contains_key(&question.category) {
            return Err(eyre!("category {} does not exist", question.category));
        }

        tables.next_id += 1;
        let id = tables.next_id;
        tables.questions.insert(
            id,
            Question {
                id,
                question: question.question.clone(),
                answer: question.answer.clone(),
                category: question.category,
                difficulty: question.difficulty,
            },
        );

        tracing::info!(id, category = question.category, "question created");
        Ok(id)
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        Ok(self.tables.write().questions.remove(&id).is_some())
    }
}
