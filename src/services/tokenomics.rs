use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::clients::ai::prompts::{
    build_competitive_analysis_prompt, build_market_data_prompt, build_tokenomics_prompt,
};
use crate::clients::ai::{decode, recover_json, CompletionProvider, JsonRecoveryError, ProviderError};
use crate::types::{
    CompetitiveAnalysis, ExperienceLevel, GenerationInput, MarketData, TokenomicsScenario,
};

pub const SCENARIO_MAX_TOKENS: u32 = 4096;
pub const MARKET_DATA_MAX_TOKENS: u32 = 1000;
pub const COMPETITIVE_ANALYSIS_MAX_TOKENS: u32 = 2000;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Recovery(#[from] JsonRecoveryError),

    #[error("response does not match the requested schema: {0}")]
    SchemaMismatch(#[from] serde_json::Error),

    #[error("response is missing the requested `{0}` section")]
    MissingSection(&'static str),
}

pub struct TokenomicsService {
    provider: Arc<dyn CompletionProvider>,
}

impl TokenomicsService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn generate(
        &self,
        input: &GenerationInput,
        level: ExperienceLevel,
    ) -> Result<TokenomicsScenario, GenerationError> {
        let prompt = build_tokenomics_prompt(input, level);
        let mut scenario: TokenomicsScenario =
            self.request("tokenomics scenario", &prompt, SCENARIO_MAX_TOKENS).await?;

        if level.profile().competitive_analysis && scenario.competitive_analysis.is_none() {
            error!(?level, "Scenario is missing competitiveAnalysis");
            return Err(GenerationError::MissingSection("competitiveAnalysis"));
        }

        scenario.project_name = input.project_name.clone();
        scenario.blockchain_platform = input.blockchain_platform.clone();

        info!(
            project = %input.project_name,
            ?level,
            scenario = %scenario.name,
            "Generated tokenomics scenario"
        );
        Ok(scenario)
    }

    pub async fn market_data(
        &self,
        project_name: &str,
        blockchain_platform: &str,
    ) -> Result<MarketData, GenerationError> {
        let prompt = build_market_data_prompt(project_name, blockchain_platform);
        let mut data: MarketData = self
            .request("market data", &prompt, MARKET_DATA_MAX_TOKENS)
            .await?;

        data.project_name = project_name.to_string();
        data.blockchain_platform = blockchain_platform.to_string();
        Ok(data)
    }

    pub async fn competitive_analysis(
        &self,
        project_name: &str,
        competitors: &[String],
    ) -> Result<CompetitiveAnalysis, GenerationError> {
        let prompt = build_competitive_analysis_prompt(project_name, competitors);
        self.request("competitive analysis", &prompt, COMPETITIVE_ANALYSIS_MAX_TOKENS)
            .await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        kind: &'static str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<T, GenerationError> {
        let start = Instant::now();
        let provider = self.provider.provider_name();

        debug!(kind, provider, max_tokens, "Sending completion request");
        let text = self
            .provider
            .complete(prompt, max_tokens)
            .await
            .map_err(|e| {
                error!(kind, provider, "Completion request failed: {}", e);
                e
            })?;
        debug!(
            kind,
            chars = text.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Received completion"
        );

        debug!(kind, "Parsing completion");
        let value = recover_json(&text).map_err(|e| {
            error!(kind, raw = %text, "Could not recover JSON from completion");
            e
        })?;

        let parsed = decode::<T>(value).map_err(|e| {
            error!(kind, raw = %text, "Completion JSON does not match schema: {}", e);
            e
        })?;
        debug!(kind, "Parsed completion");

        Ok(parsed)
    }
}
