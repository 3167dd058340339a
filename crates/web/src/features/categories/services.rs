use storage::{
    TriviaStore,
    dto::common::PageQuery,
    error::Result,
    models::{Category, Question},
};

/// List all categories ordered by id
pub async fn list_categories(store: &dyn TriviaStore) -> Result<Vec<Category>> {
    store.list_categories().await
}

/// Page of one category's questions along with the count of all questions
pub async fn questions_in_category(
    store: &dyn TriviaStore,
    category_id: i32,
    page: &PageQuery,
) -> Result<(Vec<Question>, i64)> {
    let questions = store.questions_in_category(category_id).await?;
    let total_questions = store.count_questions().await?;

    Ok((page.slice(questions), total_questions))
}
