use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};
use storage::dto::{
    category::category_map,
    common::PageQuery,
    question::{
        CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse,
        QuestionListResponse, SearchQuestionsRequest, SearchQuestionsResponse,
    },
};

use crate::SharedStore;
use crate::error::WebError;
use crate::features::resource_id;

use super::services;

#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions ordered by id", body = QuestionListResponse),
        (status = 404, description = "The page holds no questions")
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(store): State<SharedStore>,
    Query(page): Query<PageQuery>,
) -> Result<Response, WebError> {
    let (questions, total_questions) = services::question_page(store.as_ref(), &page).await?;
    let categories = services::list_categories(store.as_ref()).await?;

    if questions.is_empty() {
        return Err(WebError::NotFound);
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        categories: category_map(categories),
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "The question text is missing or the body is not JSON")
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(store): State<SharedStore>,
    Query(page): Query<PageQuery>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    let new_question = req.into_new_question()?;

    let question = services::create_question(store.as_ref(), &new_question).await?;
    let (questions, total_questions) = services::question_page(store.as_ref(), &page).await?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: question.id,
        questions,
        total_questions,
    })
    .into_response())
}

/// Deletes a question. Every failure, an unknown id included, is a 422.
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = u32, Path, description = "Question id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 422, description = "The question does not exist or could not be deleted")
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(store): State<SharedStore>,
    path: Result<Path<u32>, PathRejection>,
    Query(page): Query<PageQuery>,
) -> Result<Response, WebError> {
    let question_id = resource_id(path)?;

    services::delete_question(store.as_ref(), question_id)
        .await
        .map_err(WebError::unprocessable)?;

    let (questions, total_questions) = services::question_page(store.as_ref(), &page)
        .await
        .map_err(WebError::unprocessable)?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: question_id,
        questions,
        total_questions,
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/questions/search",
    params(PageQuery),
    request_body = SearchQuestionsRequest,
    responses(
        (status = 200, description = "Page of matching questions, possibly empty", body = SearchQuestionsResponse),
        (status = 400, description = "The body is not JSON"),
        (status = 404, description = "searchTerm is missing, not a string, or the search failed")
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(store): State<SharedStore>,
    Query(page): Query<PageQuery>,
    payload: Result<Json<SearchQuestionsRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    // Well-formed JSON with an unusable searchTerm counts as a failed search
    let Json(req) = payload.map_err(|e| match e {
        JsonRejection::JsonDataError(e) => {
            WebError::not_found(WebError::BadRequest(e.body_text()))
        }
        e => WebError::BadRequest(e.body_text()),
    })?;
    let term = req.search_term.ok_or(WebError::NotFound)?;

    let questions = services::search_questions(store.as_ref(), &term, &page)
        .await
        .map_err(WebError::not_found)?;

    Ok(Json(SearchQuestionsResponse {
        success: true,
        questions,
    })
    .into_response())
}
