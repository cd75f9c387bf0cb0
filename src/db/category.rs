use color_eyre::Result;

use super::models::Category;
use super::Db;

impl Db {
    pub(super) async fn all_categories(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type AS label FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }
}
