pub mod competitive_analysis;
pub mod generate;
pub mod market_data;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::services::TokenomicsService;

#[derive(Clone)]
pub struct AppState {
    pub tokenomics: Arc<TokenomicsService>,
}

pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/tokenomics/generate", post(generate::handler))
        .route("/api/market-data/:project_name", get(market_data::handler))
        .route("/api/competitive-analysis", post(competitive_analysis::handler))
        .route("/health", get(health_check))
}

async fn health_check() -> &'static str {
    "OK"
}
