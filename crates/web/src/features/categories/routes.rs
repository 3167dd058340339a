use axum::{Router, routing::get};

use super::handlers::{list_categories, list_questions_by_category};
use crate::SharedStore;

pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/:category_id/questions",
            get(list_questions_by_category),
        )
}
