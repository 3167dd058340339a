use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::{Result, StorageError};
use crate::models::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub struct QuestionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all questions ordered by id
    pub async fn list(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Find question by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(question)
    }

    /// Questions whose text contains `term`, ignoring case
    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            r#"
            SELECT {QUESTION_COLUMNS}
            FROM questions
            WHERE question ILIKE '%' || $1 || '%'
            ORDER BY id
            "#
        ))
        .bind(escape_like(term))
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions not listed in `exclude`, optionally restricted to one category
    pub async fn quiz_candidates(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> Result<Vec<Question>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE 1=1"
        ));

        if !exclude.is_empty() {
            query.push(" AND id <> ALL(");
            query.push_bind(exclude.to_vec());
            query.push(")");
        }

        if let Some(category_id) = category_id {
            query.push(" AND category = ");
            query.push_bind(category_id);
        }

        query.push(" ORDER BY id");

        let questions = query
            .build_query_as::<Question>()
            .fetch_all(self.pool)
            .await?;

        Ok(questions)
    }

    /// Create a new question
    pub async fn create(&self, new_question: &NewQuestion) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(&format!(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING {QUESTION_COLUMNS}
            "#
        ))
        .bind(&new_question.question)
        .bind(&new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .fetch_one(self.pool)
        .await?;

        Ok(question)
    }

    /// Delete a question by ID
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

/// Escapes LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_leaves_plain_text_alone() {
        assert_eq!(escape_like("title"), "title");
    }

    #[test]
    fn test_escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("C:\\"), "C:\\\\");
    }
}
