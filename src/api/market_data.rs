use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::AppState;
use crate::types::MarketData;
use crate::{AppError, Result};

const PLATFORM_REQUIRED: &str = "Blockchain platform is required as a query parameter";

pub async fn handler(
    State(state): State<Arc<AppState>>,
    path: std::result::Result<Path<String>, PathRejection>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MarketData>> {
    let Path(project_name) = path.map_err(|rejection| {
        tracing::warn!("Rejected market data path: {}", rejection.body_text());
        AppError::Validation("Invalid project name".to_string())
    })?;

    let Query(params) = query.map_err(|rejection| {
        tracing::warn!("Rejected market data query: {}", rejection.body_text());
        AppError::Validation(PLATFORM_REQUIRED.to_string())
    })?;

    let blockchain_platform = single_platform(&params)
        .ok_or_else(|| AppError::Validation(PLATFORM_REQUIRED.to_string()))?;

    tracing::info!(project = %project_name, platform = %blockchain_platform, "Fetching market data");

    let data = state
        .tokenomics
        .market_data(&project_name, blockchain_platform)
        .await
        .map_err(AppError::generation("Failed to fetch market data"))?;

    Ok(Json(data))
}

// A repeated key is a list, not a string.
fn single_platform(params: &[(String, String)]) -> Option<&str> {
    let mut values = params
        .iter()
        .filter(|(key, _)| key == "blockchainPlatform")
        .map(|(_, value)| value.as_str());

    match (values.next(), values.next()) {
        (Some(platform), None) if !platform.is_empty() => Some(platform),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn single_platform_accepts_one_value() {
        let params = pairs(&[("other", "x"), ("blockchainPlatform", "Solana")]);
        assert_eq!(single_platform(&params), Some("Solana"));
    }

    #[test]
    fn single_platform_rejects_missing_empty_and_repeated() {
        assert_eq!(single_platform(&pairs(&[])), None);
        assert_eq!(single_platform(&pairs(&[("blockchainPlatform", "")])), None);
        assert_eq!(
            single_platform(&pairs(&[
                ("blockchainPlatform", "a"),
                ("blockchainPlatform", "b")
            ])),
            None
        );
    }
}
