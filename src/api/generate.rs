use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::api::AppState;
use crate::types::{GenerateRequest, TokenomicsScenario};
use crate::{AppError, Result};

pub async fn handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<TokenomicsScenario>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected generate request: {}", rejection.body_text());
        AppError::Validation("Invalid tokenomics generation request".to_string())
    })?;

    tracing::info!(
        project = %request.input.project_name,
        level = ?request.experience_level,
        "Generating tokenomics scenario"
    );

    let scenario = state
        .tokenomics
        .generate(&request.input, request.experience_level)
        .await
        .map_err(AppError::generation("Failed to generate tokenomics scenarios"))?;

    Ok(Json(scenario))
}
