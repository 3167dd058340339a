use sqlx::PgPool;

use crate::error::Result;
use crate::models::Category;

pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by id
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Insert a category with a fixed id, or rename it if the id exists
    pub async fn upsert(&self, category: &Category) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, type)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET type = EXCLUDED.type
            RETURNING id, type
            "#,
        )
        .bind(category.id)
        .bind(&category.kind)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }
}
