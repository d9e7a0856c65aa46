use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// Input Types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationInput {
    pub project_name: String,
    pub project_concept: String,
    pub project_stage: String,
    pub total_supply: f64,
    pub blockchain_platform: String,
    pub target_audience: Vec<String>,
    pub project_goals: Vec<String>,
    pub competitor_analysis: Vec<String>,
    pub regulatory_considerations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_distribution: Option<Vec<TokenDistribution>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_utilities: Option<Vec<TokenUtility>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

// Tokenomics Scenario Types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenomicsScenario {
    pub name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub blockchain_platform: String,
    pub token_distribution: Vec<TokenDistribution>,
    pub initial_token_price: f64,
    pub vesting_schedule: VestingSchedule,
    pub projections: Projections,
    pub token_utilization: Vec<TokenUtility>,
    pub risk_assessment: Vec<RiskAssessment>,
    pub analysis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitive_analysis: Option<CompetitiveLandscape>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDistribution {
    pub category: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VestingSchedule {
    pub team: String,
    pub advisors: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUtility {
    pub use_case: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub factor: String,
    pub level: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projections {
    pub circulating_supply: Vec<SupplyPoint>,
    pub price: Vec<PricePoint>,
    pub market_cap: Vec<MarketCapPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyPoint {
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCapPoint {
    pub date: String,
    pub market_cap: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveLandscape {
    pub competitors: Vec<CompetitorProfile>,
    pub comparison_analysis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorProfile {
    pub name: String,
    pub description: String,
    pub tokenomics: CompetitorTokenomics,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorTokenomics {
    pub total_supply: f64,
    pub initial_price: f64,
    pub distribution: Vec<TokenDistribution>,
}

// Market Types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub market_sentiment: MarketSentiment,
    pub ecosystem_condition: String,
    pub avg_new_token_volume: f64,
    pub avg_new_token_market_cap: f64,
    pub estimated_price_range: PriceRange,
    #[serde(default = "now_rfc3339")]
    pub timestamp: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub blockchain_platform: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSentiment {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

// Competitive Analysis Types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAnalysis {
    pub project_data: CompetitorData,
    pub competitors: Vec<CompetitorData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorData {
    pub name: String,
    pub market_cap: f64,
    pub price: f64,
    pub volume: f64,
}

// Request Types
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub input: GenerationInput,
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAnalysisRequest {
    pub project_name: String,
    pub competitors: Vec<String>,
}
