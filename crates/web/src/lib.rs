use std::sync::Arc;

use axum::{
    Router,
    http::{Method, StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
};
use storage::TriviaStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod features;
pub mod openapi;

use error::WebError;

/// Store handle shared by every request handler
pub type SharedStore = Arc<dyn TriviaStore>;

/// Builds the trivia API router on top of `store`.
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .merge(features::categories::routes())
        .merge(features::questions::routes())
        .merge(features::quiz::routes())
        .fallback(fallback)
        .layer(middleware::map_response(method_not_allowed_as_json))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn fallback() -> WebError {
    WebError::NotFound
}

// The router answers a known path with an unsupported method with a bare
// 405; give it the same JSON body as every other error, keeping `Allow`.
async fn method_not_allowed_as_json(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let mut json_response = WebError::MethodNotAllowed.into_response();
    if let Some(allow) = response.headers().get(header::ALLOW) {
        json_response.headers_mut().insert(header::ALLOW, allow.clone());
    }
    json_response
}
