//! Axum route handlers for the evaluation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::analyzer::MatchReport;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume: String,
}

/// POST /evaluate
///
/// Scores a resume against a job description and returns the full report.
/// Inputs are trimmed and length-checked before any embedding call.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<MatchReport>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let job_description = request.job_description.trim();
    let resume = request.resume.trim();

    validate_inputs(job_description, resume, state.min_text_length)?;

    let report = state.evaluator.evaluate(job_description, resume).await?;

    Ok(Json(report))
}

fn validate_inputs(job_description: &str, resume: &str, min_len: usize) -> Result<(), AppError> {
    if job_description.is_empty() || resume.is_empty() {
        return Err(AppError::Validation(
            "Both job description and resume are required".to_string(),
        ));
    }
    if job_description.chars().count() < min_len {
        return Err(AppError::Validation(
            "Job description is too short. Please provide more details.".to_string(),
        ));
    }
    if resume.chars().count() < min_len {
        return Err(AppError::Validation(
            "Resume is too short. Please provide more details.".to_string(),
        ));
    }
    Ok(())
}
