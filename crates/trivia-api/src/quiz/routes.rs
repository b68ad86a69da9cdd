use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};

use super::{
    model::{QuizRequest, QuizResponse},
    selection::pick_question,
};
use crate::{ApiState, error::ApiError, metrics, state::SharedStore};

/// Create the quiz routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/quizzes", post(next_question))
}

/// Serve a random question the player has not seen yet
async fn next_question(
    State(store): State<SharedStore>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    // Every malformed quiz body is a 422, unlike the other JSON endpoints
    let Json(request) = body.map_err(|e| ApiError::Unprocessable(e.body_text()))?;
    let scope = request.category_scope()?;

    let pool = store.quiz_pool(scope).await?;
    if pool.is_empty() {
        return Err(ApiError::Unprocessable(format!(
            "no questions in quiz category {scope:?}"
        )));
    }

    let previous = &request.previous_questions;
    let mut rng = rand::thread_rng();
    let question = pick_question(&pool, previous, &mut rng).cloned();

    match &question {
        Some(q) => {
            metrics::record_quiz_draw("question");
            tracing::debug!(question_id = q.id, ?scope, "Quiz question drawn");
        }
        None => {
            metrics::record_quiz_draw("exhausted");
            tracing::info!(
                ?scope,
                seen = previous.len(),
                "Quiz pool exhausted"
            );
        }
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
