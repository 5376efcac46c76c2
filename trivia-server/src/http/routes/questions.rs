//! Question endpoints: list, create, delete, search

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use trivia_core::{CategoryId, QuestionId};

use super::categories::{category_map, CategoryMap};
use super::QuestionPage;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, IdParam, PageParam};
use crate::http::payload::{CreateQuestionBody, SearchBody};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    #[serde(flatten)]
    pub page: QuestionPage,
    pub current_category: Option<CategoryId>,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
    #[serde(flatten)]
    pub page: QuestionPage,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
    #[serde(flatten)]
    pub page: QuestionPage,
    pub current_category: Option<CategoryId>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(flatten)]
    pub page: QuestionPage,
    pub current_category: Option<CategoryId>,
}

/// GET /questions?page=N - 404 when the page is empty
async fn list_questions(
    State(state): State<AppState>,
    PageParam(page): PageParam,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let store = state.store();
    let selection = store.list_all().await?;
    let page = QuestionPage::new(&selection, page);
    if page.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionListResponse {
        success: true,
        page,
        current_category: None,
        categories: category_map(store).await?,
    }))
}

/// POST /questions - create, then return the requested page
async fn create_question(
    State(state): State<AppState>,
    PageParam(page): PageParam,
    ApiJson(body): ApiJson<CreateQuestionBody>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let store = state.store();
    let new_question = body.into_new_question()?;
    let id = store.insert(&new_question).await?;
    tracing::info!(question_id = id, category = new_question.category(), "question created");

    let selection = store.list_all().await?;
    Ok(Json(CreatedResponse {
        success: true,
        created: id,
        page: QuestionPage::new(&selection, page),
    }))
}

/// DELETE /questions/{id} - 404 when the id is unknown
async fn delete_question(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    PageParam(page): PageParam,
) -> Result<Json<DeletedResponse>, ApiError> {
    let store = state.store();
    if store.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    store.delete_by_id(id).await?;
    tracing::info!(question_id = id, "question deleted");

    let selection = store.list_all().await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        page: QuestionPage::new(&selection, page),
        current_category: None,
    }))
}

/// POST /questions/search - an empty result is still a success
async fn search_questions(
    State(state): State<AppState>,
    PageParam(page): PageParam,
    ApiJson(body): ApiJson<SearchBody>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = body.term();
    let selection = state.store().list_matching(&term).await?;
    tracing::debug!(term = ?term.as_str(), hits = selection.len(), "question search");

    Ok(Json(SearchResponse {
        success: true,
        page: QuestionPage::new(&selection, page),
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
}
