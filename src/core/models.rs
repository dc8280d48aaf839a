use serde::{Deserialize, Serialize};

/// Which instruction template and model a summarization call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    /// One original document chunk in isolation.
    Leaf,
    /// Several existing summaries synthesized into one.
    Combine,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
