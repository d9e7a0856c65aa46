//! Tries the whole completion as JSON, then the span from the first `{` to the
//! last `}`. The span is greedy, so several separate objects fail to recover.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonRecoveryError {
    #[error("No valid JSON object found in the response")]
    NoValidJson { raw: String },
}

fn brace_span() -> &'static Regex {
    static SPAN: OnceLock<Regex> = OnceLock::new();
    SPAN.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("brace span pattern is valid"))
}

pub fn recover_json(raw_text: &str) -> Result<Value, JsonRecoveryError> {
    match serde_json::from_str::<Value>(raw_text) {
        Ok(value) => return Ok(value),
        Err(e) => tracing::debug!("Full-text JSON parse failed: {}", e),
    }

    let Some(span) = brace_span().find(raw_text) else {
        tracing::debug!("No braces found in completion text");
        return Err(JsonRecoveryError::NoValidJson {
            raw: raw_text.to_string(),
        });
    };

    match serde_json::from_str::<Value>(span.as_str()) {
        Ok(value) => {
            tracing::debug!(
                start = span.start(),
                end = span.end(),
                "Extracted JSON object from surrounding text"
            );
            Ok(value)
        }
        Err(e) => {
            tracing::debug!("Extracted span is not valid JSON: {}", e);
            Err(JsonRecoveryError::NoValidJson {
                raw: raw_text.to_string(),
            })
        }
    }
}

pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}
