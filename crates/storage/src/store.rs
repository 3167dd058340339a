use async_trait::async_trait;

use crate::Database;
use crate::error::Result;
use crate::models::{Category, NewQuestion, Question};
use crate::repository::{category::CategoryRepository, question::QuestionRepository};

/// Persistence operations the trivia API is built on.
///
/// Lists come back ordered by id. `find_question` and `delete_question`
/// report a missing row as [`StorageError::NotFound`](crate::StorageError::NotFound).
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn list_questions(&self) -> Result<Vec<Question>>;

    async fn count_questions(&self) -> Result<i64>;

    async fn find_question(&self, id: i32) -> Result<Question>;

    async fn create_question(&self, new_question: &NewQuestion) -> Result<Question>;

    async fn delete_question(&self, id: i32) -> Result<()>;

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>>;

    async fn quiz_candidates(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> Result<Vec<Question>>;
}

#[async_trait]
impl TriviaStore for Database {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        CategoryRepository::new(self.pool()).list().await
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        QuestionRepository::new(self.pool()).list().await
    }

    async fn count_questions(&self) -> Result<i64> {
        QuestionRepository::new(self.pool()).count().await
    }

    async fn find_question(&self, id: i32) -> Result<Question> {
        QuestionRepository::new(self.pool()).find_by_id(id).await
    }

    async fn create_question(&self, new_question: &NewQuestion) -> Result<Question> {
        QuestionRepository::new(self.pool()).create(new_question).await
    }

    async fn delete_question(&self, id: i32) -> Result<()> {
        QuestionRepository::new(self.pool()).delete(id).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        QuestionRepository::new(self.pool()).search(term).await
    }

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>> {
        QuestionRepository::new(self.pool())
            .list_by_category(category_id)
            .await
    }

    async fn quiz_candidates(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> Result<Vec<Question>> {
        QuestionRepository::new(self.pool())
            .quiz_candidates(exclude, category_id)
            .await
    }
}
