use sqlx::{PgPool, Postgres, Transaction};
use storage::models::{Category, NewQuestion};
use tracing::{debug, info};

use super::models::SeedFile;
use crate::Result;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub categories: usize,
    pub questions: usize,
}

/// Writes a validated seed file in a single transaction.
pub struct SeedLoader<'a> {
    pool: &'a PgPool,
}

impl<'a> SeedLoader<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Categories are upserted by id; questions are always inserted as new rows.
    pub async fn import_to_database(&self, seed: &SeedFile) -> Result<ImportSummary> {
        let mut tx = self.pool.begin().await?;
        let mut summary = ImportSummary::default();

        for category in &seed.categories {
            self.upsert_category(&Category::from(category), &mut tx)
                .await?;
            summary.categories += 1;
        }

        if !seed.categories.is_empty() {
            self.sync_category_sequence(&mut tx).await?;
        }

        for question in &seed.questions {
            let id = self
                .insert_question(&NewQuestion::from(question), &mut tx)
                .await?;
            debug!("Inserted question {}", id);
            summary.questions += 1;
        }

        tx.commit().await?;

        info!(
            "Imported {} categories and {} questions",
            summary.categories, summary.questions
        );
        Ok(summary)
    }

    async fn upsert_category(
        &self,
        category: &Category,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, type)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET type = EXCLUDED.type
            "#,
        )
        .bind(category.id)
        .bind(&category.kind)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn sync_category_sequence(&self, tx: &mut Transaction<'_, Postgres>) -> Result<()> {
        sqlx::query(
            r#"
            SELECT setval(
                pg_get_serial_sequence('categories', 'id'),
                COALESCE((SELECT MAX(id) FROM categories), 0) + 1,
                false
            )
            "#,
        )
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn insert_question(
        &self,
        question: &NewQuestion,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&mut **tx)
        .await?;

        Ok(id)
    }
}
