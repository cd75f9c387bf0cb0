// Database module - provides data access layer

use async_trait::async_trait;
use color_eyre::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};

// Re-export models for convenience
pub mod models;
pub use models::*;

mod category;
mod memory;
mod migrations;
mod question;

pub use memory::MemoryDb;

/// Everything the HTTP layer needs from a question store.
///
/// Every question listing is ordered by difficulty, then id.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// All categories, ascending by id.
    async fn categories(&self) -> Result<Vec<Category>>;

    async fn questions(&self) -> Result<Vec<Question>>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>>;

    /// Questions matching `filter` whose id is not in `previous`.
    async fn quiz_pool(&self, filter: CategoryFilter, previous: &[i32]) -> Result<Vec<Question>>;

    async fn question(&self, id: i32) -> Result<Option<Question>>;

    /// Inserts a question and returns its id. Fails if the category does not exist.
    async fn insert_question(&self, question: &crate::models::NewQuestion) -> Result<i32>;

    /// Returns `false` when no question had that id.
    async fn delete_question(&self, id: i32) -> Result<bool>;
}

// Main database handle
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    pub async fn new(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        // Verify connection
        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;
        color_eyre::eyre::ensure!(one == 1, "connection check failed");

        migrations::run(&pool).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { pool })
    }

    pub async fn migration_applied(&self, version: &str) -> Result<bool> {
        migrations::applied(&self.pool, version).await
    }
}

#[async_trait]
impl Repository for Db {
    async fn categories(&self) -> Result<Vec<Category>> {
        self.all_categories().await
    }

    async fn questions(&self) -> Result<Vec<Question>> {
        self.all_questions().await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        self.questions_matching(term).await
    }

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>> {
        self.questions_by_category(category_id).await
    }

    async fn quiz_pool(&self, filter: CategoryFilter, previous: &[i32]) -> Result<Vec<Question>> {
        self.unseen_questions(filter, previous).await
    }

    async fn question(&self, id: i32) -> Result<Option<Question>> {
        self.get_question(id).await
    }

    async fn insert_question(&self, question: &crate::models::NewQuestion) -> Result<i32> {
        self.create_question(question).await
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        self.remove_question(id).await
    }
}
