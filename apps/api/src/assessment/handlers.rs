use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::assessment::catalog;
use crate::assessment::scoring::score_assessment;
use crate::errors::AppError;
use crate::models::assessment::{Answer, AssessmentResult, CareerMatch, Question};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssessmentSubmission {
    pub answers: Vec<Answer>,
    /// Accepted for forward compatibility; not used by scoring.
    #[serde(default)]
    pub user_info: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub result_id: String,
    pub career_matches: Vec<CareerMatch>,
    pub personality_type: String,
    pub top_strengths: Vec<String>,
}

/// GET /api/
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "PathFinder API is running" }))
}

/// GET /api/questions
pub async fn list_questions() -> Json<&'static [Question]> {
    Json(catalog::questions())
}

/// POST /api/submit-assessment
///
/// Scores the answers, persists the full result, and returns the summary.
/// A store failure fails the whole request; nothing partial is kept visible.
pub async fn submit_assessment(
    State(state): State<AppState>,
    Json(submission): Json<AssessmentSubmission>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let result = score_assessment(&submission.answers);
    state.store.put(&result).await?;

    Ok(Json(SubmissionResponse {
        result_id: result.id.to_string(),
        career_matches: result.career_matches,
        personality_type: result.personality_type,
        top_strengths: result.top_strengths,
    }))
}

/// GET /api/results/:result_id
///
/// Ids are looked up as opaque strings; anything never issued — including
/// strings that are not UUIDs — is simply not found.
pub async fn get_result(
    State(state): State<AppState>,
    Path(result_id): Path<String>,
) -> Result<Json<AssessmentResult>, AppError> {
    let result = state
        .store
        .get(&result_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Result {result_id} not found")))?;
    Ok(Json(result))
}
