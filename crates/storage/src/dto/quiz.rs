use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::deserializers::optional_int_or_string;
use crate::models::Question;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Ids already shown in this quiz session
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: QuizCategory,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// Required key; `null` selects from every category
    #[serde(deserialize_with = "optional_int_or_string")]
    pub id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_category_means_any() {
        let request: QuizRequest =
            serde_json::from_str(r#"{"previous_questions": [1, 2], "quiz_category": {"id": null}}"#)
                .unwrap();

        assert_eq!(request.previous_questions, Some(vec![1, 2]));
        assert_eq!(request.quiz_category.id, None);
    }

    #[test]
    fn test_category_id_is_required() {
        let result = serde_json::from_str::<QuizRequest>(
            r#"{"previous_questions": [], "quiz_category": {"type": "Science"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_category_object_is_required() {
        let result = serde_json::from_str::<QuizRequest>(r#"{"previous_questions": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_front_end_category_shape() {
        let request: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [], "quiz_category": {"type": "Science", "id": "1"}}"#,
        )
        .unwrap();

        assert_eq!(request.previous_questions, Some(vec![]));
        assert_eq!(request.quiz_category.id, Some(1));
    }
}
