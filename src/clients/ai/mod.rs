pub mod anthropic;
pub mod prompts;
pub mod recovery;

pub use anthropic::AnthropicClient;
pub use recovery::{decode, recover_json, JsonRecoveryError};

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ProviderConfig;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("completion request failed: {0}")]
    Request(String),

    #[error("completion provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode completion response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError>;
    fn provider_name(&self) -> &'static str;
}

pub fn create_completion_provider(
    config: &ProviderConfig,
) -> anyhow::Result<Arc<dyn CompletionProvider>> {
    Ok(Arc::new(AnthropicClient::new(config)?))
}
