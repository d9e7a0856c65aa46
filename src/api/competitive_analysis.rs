use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::api::AppState;
use crate::types::{CompetitiveAnalysis, CompetitiveAnalysisRequest};
use crate::{AppError, Result};

pub async fn handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CompetitiveAnalysisRequest>, JsonRejection>,
) -> Result<Json<CompetitiveAnalysis>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected competitive analysis request: {}", rejection.body_text());
        AppError::Validation("Invalid competitive analysis request".to_string())
    })?;

    let analysis = state
        .tokenomics
        .competitive_analysis(&request.project_name, &request.competitors)
        .await
        .map_err(AppError::generation("Failed to fetch competitive analysis"))?;

    Ok(Json(analysis))
}
