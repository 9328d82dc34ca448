//! Infill response payload.

use serde::{Deserialize, Serialize};

/// Completion payload returned by `POST /infill`.
///
/// Timing and cache fields are constants; they only satisfy the client's
/// response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfillResponse {
    pub content: String,
    #[serde(rename = "timings/prompt_n")]
    pub prompt_n: u32,
    #[serde(rename = "timings/prompt_ms")]
    pub prompt_ms: String,
    #[serde(rename = "timings/prompt_per_second")]
    pub prompt_per_second: String,
    #[serde(rename = "timings/predicted_n")]
    pub predicted_n: u32,
    #[serde(rename = "timings/predicted_ms")]
    pub predicted_ms: String,
    #[serde(rename = "timings/predicted_per_second")]
    pub predicted_per_second: String,
    pub tokens_cached: u32,
    #[serde(rename = "timings/truncated")]
    pub truncated: bool,
    /// Same text as `content`, for older clients
    pub result: String,
}

impl InfillResponse {
    pub fn from_content(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            result: content.clone(),
            content,
            prompt_n: 50,
            prompt_ms: "10.5".to_string(),
            prompt_per_second: "4761.9".to_string(),
            predicted_n: 20,
            predicted_ms: "50.2".to_string(),
            predicted_per_second: "398.4".to_string(),
            tokens_cached: 100,
            truncated: false,
        }
    }
}
