use axum::{
    Router,
    routing::{delete, get, post},
};

use super::handlers::{create_question, delete_question, list_questions, search_questions};
use crate::SharedStore;

pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/:question_id", delete(delete_question))
}
