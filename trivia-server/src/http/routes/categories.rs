//! Category endpoints

use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trivia_core::{CategoryId, QuestionStore};

use super::QuestionPage;
use crate::http::error::ApiError;
use crate::http::extractors::{IdParam, PageParam};
use crate::state::AppState;

/// Categories keyed by id; ids serialize as JSON object keys
pub type CategoryMap = BTreeMap<CategoryId, String>;

pub async fn category_map(store: &dyn QuestionStore) -> Result<CategoryMap, ApiError> {
    Ok(store
        .list_categories()
        .await?
        .into_iter()
        .map(|c| (c.id, c.label))
        .collect())
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub page: QuestionPage,
    pub current_category: Option<CategoryId>,
}

/// GET /categories - id to type label
async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoryMap>, ApiError> {
    Ok(Json(category_map(state.store()).await?))
}

/// GET /categories/{id}/questions - 404 when the page is empty
async fn list_category_questions(
    State(state): State<AppState>,
    IdParam(category): IdParam,
    PageParam(page): PageParam,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let selection = state.store().list_by_category(category).await?;
    let page = QuestionPage::new(&selection, page);
    if page.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        page,
        current_category: None,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
