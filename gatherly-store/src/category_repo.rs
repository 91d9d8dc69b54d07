use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use gatherly_core::repository::{CategoryRepository, RepoError};
use gatherly_shared::models::Category;

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, RepoError> {
        let rows =
            sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|row| Category {
                id: row.id,
                name: row.name,
            })
            .collect())
    }
}
