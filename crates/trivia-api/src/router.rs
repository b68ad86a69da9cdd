use axum::{Router, http::StatusCode, routing::get};

use crate::{category, error::ApiError, question, quiz, state::ApiState};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(category::routes())
        .merge(question::routes())
        .merge(quiz::routes())
        .fallback(handler_404)
        .method_not_allowed_fallback(handler_405)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> ApiError {
    ApiError::NotFound("no route matches the request path".to_string())
}

async fn handler_405() -> ApiError {
    ApiError::MethodNotAllowed
}
