use std::collections::BTreeMap;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use trivia_db::models::Category;

use crate::{ApiState, error::ApiError, state::SharedStore};

/// Categories keyed by id, serialized as `{"1": "Science", ...}`
pub type CategoryMap = BTreeMap<i64, String>;

/// Create the category routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/categories", get(list_categories))
}

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories.iter().map(|c| (c.id, c.kind.clone())).collect()
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

async fn list_categories(
    State(store): State<SharedStore>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = store.list_categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(&categories),
    }))
}
