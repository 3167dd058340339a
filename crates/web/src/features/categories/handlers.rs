use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use storage::dto::{
    category::{CategoryListResponse, CategoryQuestionsResponse, category_map},
    common::PageQuery,
};

use crate::SharedStore;
use crate::error::WebError;
use crate::features::resource_id;

use super::services;

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories keyed by id", body = CategoryListResponse),
        (status = 404, description = "No categories exist")
    ),
    tag = "categories"
)]
pub async fn list_categories(State(store): State<SharedStore>) -> Result<Response, WebError> {
    let categories = services::list_categories(store.as_ref()).await?;

    if categories.is_empty() {
        return Err(WebError::NotFound);
    }

    let total_categories = categories.len();

    Ok(Json(CategoryListResponse {
        success: true,
        categories: category_map(categories),
        total_categories,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = u32, Path, description = "Category id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of the category's questions; total_questions counts all questions", body = CategoryQuestionsResponse),
        (status = 422, description = "The questions could not be loaded")
    ),
    tag = "categories"
)]
pub async fn list_questions_by_category(
    State(store): State<SharedStore>,
    path: Result<Path<u32>, PathRejection>,
    Query(page): Query<PageQuery>,
) -> Result<Response, WebError> {
    let category_id = resource_id(path)?;

    let (questions, total_questions) =
        services::questions_in_category(store.as_ref(), category_id, &page)
            .await
            .map_err(WebError::unprocessable)?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category_id,
    })
    .into_response())
}
