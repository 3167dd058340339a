use axum::{Router, routing::post};

use super::handlers::next_quiz_question;
use crate::SharedStore;

pub fn routes() -> Router<SharedStore> {
    Router::new().route("/play", post(next_quiz_question))
}
