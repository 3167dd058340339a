use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use storage::dto::quiz::{QuizRequest, QuizResponse};

use crate::SharedStore;
use crate::error::WebError;

use super::services;

/// Draws the next quiz question.
///
/// An empty body is a 404; anything else that cannot be served is a 400.
#[utoipa::path(
    post,
    path = "/play",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "A random unseen question, or null when none is left", body = QuizResponse),
        (status = 400, description = "The body is malformed or the question could not be drawn"),
        (status = 404, description = "The body is empty")
    ),
    tag = "quiz"
)]
pub async fn next_quiz_question(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<Response, WebError> {
    let request = parse_quiz_request(&body)?;

    let question = services::next_question(store.as_ref(), &request)
        .await
        .map_err(WebError::bad_request)?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    })
    .into_response())
}

fn parse_quiz_request(body: &[u8]) -> Result<QuizRequest, WebError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(WebError::NotFound);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| WebError::BadRequest(e.to_string()))?;

    if is_blank(&value) {
        return Err(WebError::NotFound);
    }

    serde_json::from_value(value).map_err(|e| WebError::BadRequest(e.to_string()))
}

/// JSON values that carry nothing: null, false, zero and empty containers
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;

    fn status_of(body: &str) -> Option<StatusCode> {
        parse_quiz_request(body.as_bytes())
            .err()
            .map(|e| e.status_code())
    }

    #[test]
    fn test_blank_values() {
        for value in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(is_blank(&value), "{value} should be blank");
        }
        for value in [json!(true), json!(1), json!("x"), json!([1]), json!({"a": 1})] {
            assert!(!is_blank(&value), "{value} should not be blank");
        }
    }

    #[test]
    fn test_empty_bodies_are_not_found() {
        for body in ["", "  ", "{}", "null", "[]"] {
            assert_eq!(status_of(body), Some(StatusCode::NOT_FOUND), "body {body:?}");
        }
    }

    #[test]
    fn test_malformed_bodies_are_bad_requests() {
        for body in [
            "{not json",
            r#"{"previous_questions": []}"#,
            r#"{"previous_questions": [], "quiz_category": {}}"#,
            r#"{"previous_questions": [], "quiz_category": 3}"#,
            r#"{"previous_questions": "1,2", "quiz_category": {"id": 1}}"#,
        ] {
            assert_eq!(status_of(body), Some(StatusCode::BAD_REQUEST), "body {body:?}");
        }
    }

    #[test]
    fn test_valid_body_parses() {
        let request =
            parse_quiz_request(br#"{"previous_questions": [4], "quiz_category": {"id": 2}}"#)
                .unwrap();

        assert_eq!(request.previous_questions, Some(vec![4]));
        assert_eq!(request.quiz_category.id, Some(2));
    }
}
