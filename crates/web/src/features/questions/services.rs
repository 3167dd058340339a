use storage::{
    TriviaStore,
    dto::common::PageQuery,
    error::Result,
    models::{Category, NewQuestion, Question},
};

/// Page of all questions ordered by id, with the total question count
pub async fn question_page(
    store: &dyn TriviaStore,
    page: &PageQuery,
) -> Result<(Vec<Question>, i64)> {
    let questions = store.list_questions().await?;
    let total_questions = questions.len() as i64;

    Ok((page.slice(questions), total_questions))
}

pub async fn list_categories(store: &dyn TriviaStore) -> Result<Vec<Category>> {
    store.list_categories().await
}

/// Create a new question
pub async fn create_question(
    store: &dyn TriviaStore,
    new_question: &NewQuestion,
) -> Result<Question> {
    let question = store.create_question(new_question).await?;
    tracing::info!(question_id = question.id, "Question created");

    Ok(question)
}

/// Delete a question, failing with `NotFound` when it does not exist
pub async fn delete_question(store: &dyn TriviaStore, question_id: i32) -> Result<()> {
    store.find_question(question_id).await?;
    store.delete_question(question_id).await?;
    tracing::info!(question_id, "Question deleted");

    Ok(())
}

/// Page of questions containing `term`, ignoring case
pub async fn search_questions(
    store: &dyn TriviaStore,
    term: &str,
    page: &PageQuery,
) -> Result<Vec<Question>> {
    let questions = store.search_questions(term).await?;

    Ok(page.slice(questions))
}
