//! Quiz play endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use trivia_core::{Question, QuizSelector};

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::payload::QuizBody;
use crate::state::AppState;

/// `question` is null once every candidate has been shown
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - next unseen question
async fn next_question(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<QuizBody>,
) -> Result<Json<QuizResponse>, ApiError> {
    let request = body.into_request()?;
    let question = QuizSelector::new(state.store(), state.random())
        .next_question(&request)
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
