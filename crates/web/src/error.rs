use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    NotFound,
    MethodNotAllowed,
    Unprocessable(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound => write!(f, "Resource not found"),
            Self::MethodNotAllowed => write!(f, "Method not allowed"),
            Self::Unprocessable(msg) => write!(f, "Unprocessable: {}", msg),
        }
    }
}

impl WebError {
    /// Reports any failure as 422, keeping the cause in the logs only.
    pub fn unprocessable(error: impl Into<WebError>) -> Self {
        let error = error.into();
        tracing::warn!("Reporting as unprocessable: {}", error);
        Self::Unprocessable(error.to_string())
    }

    /// Reports any failure as 404, keeping the cause in the logs only.
    pub fn not_found(error: impl Into<WebError>) -> Self {
        let error = error.into();
        tracing::warn!("Reporting as not found: {}", error);
        Self::NotFound
    }

    /// Reports any failure as 400, keeping the cause in the logs only.
    pub fn bad_request(error: impl Into<WebError>) -> Self {
        match error.into() {
            bad_request @ Self::BadRequest(_) => bad_request,
            error => {
                tracing::warn!("Reporting as bad request: {}", error);
                Self::BadRequest(error.to_string())
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Fixed message rendered for each status in the error body
pub fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        match &self {
            Self::Storage(StorageError::NotFound) => {}
            Self::Storage(e) => tracing::error!("Storage error: {:?}", e),
            Self::Validation(errors) => tracing::debug!("Validation failed: {}", errors),
            Self::BadRequest(msg) => tracing::debug!("Bad request: {}", msg),
            _ => {}
        }

        let body = json!({
            "success": false,
            "error": status_code.as_u16(),
            "message": status_message(status_code),
        });

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_not_found_is_404() {
        let error = WebError::from(StorageError::NotFound);
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_collapsing_keeps_fixed_status() {
        assert_eq!(
            WebError::unprocessable(StorageError::NotFound).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            WebError::not_found(WebError::BadRequest("no term".to_string())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::bad_request(StorageError::NotFound).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(status_message(StatusCode::BAD_REQUEST), "bad request");
        assert_eq!(status_message(StatusCode::NOT_FOUND), "resource not found");
        assert_eq!(status_message(StatusCode::METHOD_NOT_ALLOWED), "method not allowed");
        assert_eq!(status_message(StatusCode::UNPROCESSABLE_ENTITY), "unprocessable");
        assert_eq!(
            status_message(StatusCode::INTERNAL_SERVER_ERROR),
            "internal server error"
        );
    }
}
