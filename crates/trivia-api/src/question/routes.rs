use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post},
};
use trivia_db::{QuestionFilter, models::NewQuestion};

use super::model::{
    CreatedResponse, DeletedResponse, FilteredQuestionsResponse, QuestionListResponse,
    SearchRequest,
};
use crate::{
    ApiState,
    category::category_map,
    error::ApiError,
    extract::{ApiJson, ApiPath, ApiQuery},
    pagination::{PageParams, fetch_non_empty_page, fetch_page},
    state::SharedStore,
};

/// Create the question routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/questions/{question_id}", delete(delete_question))
        .route("/questions/add", post(create_question))
        .route("/questions/search", post(search_questions))
        .route(
            "/categories/{category_id}/questions",
            get(list_category_questions),
        )
}

async fn list_questions(
    State(store): State<SharedStore>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let (filter, page) = (QuestionFilter::All, params.page());
    let page = fetch_non_empty_page(store.as_ref(), &filter, page).await?;
    let categories = store.list_categories().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        categories: category_map(&categories),
    }))
}

async fn delete_question(
    State(store): State<SharedStore>,
    ApiPath(question_id): ApiPath<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !store.delete_question(question_id).await? {
        return Err(ApiError::NotFound(format!(
            "question {question_id} does not exist"
        )));
    }

    tracing::info!(question_id, "Question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted_question: question_id,
    }))
}

async fn create_question(
    State(store): State<SharedStore>,
    ApiJson(payload): ApiJson<NewQuestion>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let question = store.insert_question(payload).await?;

    tracing::info!(
        question_id = question.id,
        category = question.category,
        "Question created"
    );

    Ok(Json(CreatedResponse {
        success: true,
        created: question.id,
    }))
}

async fn search_questions(
    State(store): State<SharedStore>,
    ApiQuery(params): ApiQuery<PageParams>,
    ApiJson(request): ApiJson<SearchRequest>,
) -> Result<Json<FilteredQuestionsResponse>, ApiError> {
    let term = request
        .term()
        .ok_or_else(|| ApiError::NotFound("no search term supplied".to_string()))?;
    let page = request.page().unwrap_or_else(|| params.page());
    let filter = QuestionFilter::Search(term.to_string());

    let result = fetch_page(store.as_ref(), &filter, page).await?;

    tracing::debug!(term, matches = result.total, "Question search");

    Ok(Json(FilteredQuestionsResponse {
        success: true,
        questions: result.questions,
        total_questions: result.total,
        current_category: None,
    }))
}

async fn list_category_questions(
    State(store): State<SharedStore>,
    ApiPath(category_id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<FilteredQuestionsResponse>, ApiError> {
    let (filter, page) = (QuestionFilter::Category(category_id), params.page());
    let page = fetch_non_empty_page(store.as_ref(), &filter, page).await?;

    Ok(Json(FilteredQuestionsResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        current_category: None,
    }))
}
