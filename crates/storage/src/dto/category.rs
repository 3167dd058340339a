use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, Question};

/// Categories keyed by id, rendered as a JSON object `{"1": "Science", ...}`
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id, category.kind))
        .collect()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// Page of questions filtered by category.
///
/// `total_questions` counts every question in the table, not only the ones
/// in `current_category`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: i32,
}
