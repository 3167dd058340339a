use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::categories::handlers::list_categories,
        features::categories::handlers::list_questions_by_category,
        features::questions::handlers::list_questions,
        features::questions::handlers::create_question,
        features::questions::handlers::delete_question,
        features::questions::handlers::search_questions,
        features::quiz::handlers::next_quiz_question,
    ),
    components(
        schemas(
            storage::models::Category,
            storage::models::Question,
            storage::dto::category::CategoryListResponse,
            storage::dto::category::CategoryQuestionsResponse,
            storage::dto::question::QuestionListResponse,
            storage::dto::question::CreateQuestionRequest,
            storage::dto::question::CreateQuestionResponse,
            storage::dto::question::DeleteQuestionResponse,
            storage::dto::question::SearchQuestionsRequest,
            storage::dto::question::SearchQuestionsResponse,
            storage::dto::quiz::QuizRequest,
            storage::dto::quiz::QuizCategory,
            storage::dto::quiz::QuizResponse,
        )
    ),
    tags(
        (name = "categories", description = "Trivia categories"),
        (name = "questions", description = "Question catalogue"),
        (name = "quiz", description = "Quiz play"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in [
            "/categories",
            "/categories/{category_id}/questions",
            "/questions",
            "/questions/{question_id}",
            "/questions/search",
            "/play",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing {path} in {paths:?}"
            );
        }
    }
}
