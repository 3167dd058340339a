use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StorageError};
use crate::models::{Category, NewQuestion, Question};
use crate::store::TriviaStore;

/// [`TriviaStore`] kept entirely in memory, for tests and local runs
/// without PostgreSQL.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    last_question_id: i32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given rows. Questions keep their ids.
    pub fn with_data(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let last_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0);
        let state = State {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            last_question_id,
        };

        Self {
            state: RwLock::new(state),
        }
    }

    async fn filter_questions<F>(&self, predicate: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        let state = self.state.read().await;
        state
            .questions
            .values()
            .filter(|question| predicate(question))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TriviaStore for InMemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let state = self.state.read().await;
        Ok(state.categories.values().cloned().collect())
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.filter_questions(|_| true).await)
    }

    async fn count_questions(&self) -> Result<i64> {
        let state = self.state.read().await;
        Ok(state.questions.len() as i64)
    }

    async fn find_question(&self, id: i32) -> Result<Question> {
        let state = self.state.read().await;
        state
            .questions
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn create_question(&self, new_question: &NewQuestion) -> Result<Question> {
        let mut state = self.state.write().await;
        state.last_question_id += 1;

        let question = new_question.clone().into_question(state.last_question_id);
        state.questions.insert(question.id, question.clone());

        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<()> {
        let mut state = self.state.write().await;
        state
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let term = term.to_lowercase();
        Ok(self
            .filter_questions(|q| q.question.to_lowercase().contains(&term))
            .await)
    }

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>> {
        Ok(self.filter_questions(|q| q.category == category_id).await)
    }

    async fn quiz_candidates(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> Result<Vec<Question>> {
        Ok(self
            .filter_questions(|q| {
                !exclude.contains(&q.id) && category_id.is_none_or(|id| q.category == id)
            })
            .await)
    }
}
