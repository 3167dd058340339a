use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::category::CategoryMap;
use super::deserializers::optional_int_or_string;
use crate::models::{NewQuestion, Question};

pub const DEFAULT_CATEGORY: i32 = 1;
pub const DEFAULT_DIFFICULTY: i32 = 1;

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

/// Request payload for adding a question
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    #[validate(required(message = "question is required"))]
    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "optional_int_or_string")]
    #[schema(default = 1)]
    pub category: Option<i32>,

    #[serde(default, deserialize_with = "optional_int_or_string")]
    #[schema(default = 1)]
    pub difficulty: Option<i32>,
}

impl CreateQuestionRequest {
    /// Validates the payload and fills in the column defaults.
    pub fn into_new_question(self) -> Result<NewQuestion, ValidationErrors> {
        self.validate()?;

        let Self {
            question,
            answer,
            category,
            difficulty,
        } = self;

        Ok(NewQuestion {
            question: question.unwrap_or_default(),
            answer,
            category: category.unwrap_or(DEFAULT_CATEGORY),
            difficulty: difficulty.unwrap_or(DEFAULT_DIFFICULTY),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
}
