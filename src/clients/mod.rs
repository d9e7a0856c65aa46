pub mod ai;

pub use ai::{create_completion_provider, AnthropicClient, CompletionProvider};
