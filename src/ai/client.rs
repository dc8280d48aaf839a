//! LLM (OpenAI-compatible chat completions) API client module
//!
//! Encapsulates the outbound model call used for every summary.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use super::prompt_builder::build_messages;
use crate::errors::SummaryError;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// The language-model collaborator: one system instruction, one user
/// message, one model id in; the response text out.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// # Errors
    ///
    /// Returns an error on transport, authentication, rate-limit or
    /// response-shape failures. An empty completion is `Ok(String::new())`.
    async fn complete(&self, system: &str, user: &str, model: &str)
    -> Result<String, SummaryError>;
}

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, SummaryError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            SummaryError::HttpError(format!("Failed to build LLM HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn headers(&self) -> Result<reqwest::header::HeaderMap, SummaryError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| SummaryError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| SummaryError::HttpError(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        Ok(headers)
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        model: &str,
    ) -> Result<String, SummaryError> {
        let prompt = build_messages(system, user);

        #[cfg(feature = "debug-logs")]
        info!("Using prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();
        debug!(model, estimated_input_tokens, "Requesting completion");

        let request_body = json!({
            "model": model,
            "messages": build_chat_input_from_prompt(&prompt),
        });

        let response = self
            .http
            .post(self.endpoint())
            .headers(self.headers()?)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummaryError::HttpError(format!("LLM API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummaryError::LlmError(format!(
                "LLM API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| SummaryError::LlmError(format!("Failed to parse LLM response: {e}")))?;

        let text = extract_completion_text(&response_json);
        info!(model, output_chars = text.chars().count(), "Completion received");
        Ok(text)
    }
}

/// Build the chat-completions `messages` payload from a chat-style prompt.
/// Image parts are dropped; only text is ever summarized here.
pub(crate) fn build_chat_input_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };

            match &m.content {
                Content::Text(t) => Some(json!({
                    "role": role_str,
                    "content": t
                })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

/// `choices[0].message.content`, or an empty string when the service sent
/// no content.
#[must_use]
pub fn extract_completion_text(response_json: &Value) -> String {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(std::string::ToString::to_string)
        .unwrap_or_default()
}
