//! Stateless summarization client: picks the template and model for a mode
//! and delegates the call to the injected completion backend.

use std::sync::Arc;
use std::time::Duration;

use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

use super::client::CompletionBackend;
use super::prompt_builder::{system_instruction, user_content};
use crate::core::config::PipelineConfig;
use crate::core::models::SummaryMode;
use crate::errors::SummaryError;

const RETRY_BASE_DELAY_MS: u64 = 100;
const RETRY_MAX_DELAY: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct Summarizer {
    backend: Arc<dyn CompletionBackend>,
    leaf_model: String,
    combine_model: String,
    max_retries: usize,
}

impl Summarizer {
    #[must_use]
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        leaf_model: String,
        combine_model: String,
    ) -> Self {
        Self {
            backend,
            leaf_model,
            combine_model,
            max_retries: 0,
        }
    }

    #[must_use]
    pub fn from_config(backend: Arc<dyn CompletionBackend>, config: &PipelineConfig) -> Self {
        Self::new(
            backend,
            config.leaf_model.clone(),
            config.combine_model.clone(),
        )
        .with_max_retries(config.max_retries)
    }

    /// Retry each failed call up to `max_retries` extra times with jittered
    /// exponential backoff. Zero disables retrying.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub fn model_for(&self, mode: SummaryMode) -> &str {
        match mode {
            SummaryMode::Leaf => &self.leaf_model,
            SummaryMode::Combine => &self.combine_model,
        }
    }

    /// Summarize one chunk (leaf) or one joined group of summaries (combine).
    ///
    /// # Errors
    ///
    /// Returns the backend's error unchanged once the retry budget is spent.
    pub async fn summarize(
        &self,
        text: &str,
        instruction: &str,
        mode: SummaryMode,
    ) -> Result<String, SummaryError> {
        let system = system_instruction(instruction, mode);
        let user = user_content(text, instruction);
        let model = self.model_for(mode);

        debug!(?mode, model, input_chars = text.chars().count(), "Summarizing fragment");

        if self.max_retries == 0 {
            return self.backend.complete(&system, &user, model).await;
        }

        let strategy = ExponentialBackoff::from_millis(RETRY_BASE_DELAY_MS)
            .max_delay(RETRY_MAX_DELAY)
            .map(jitter)
            .take(self.max_retries);

        let backend = &self.backend;
        let (system, user) = (system.as_str(), user.as_str());
        RetryIf::spawn(
            strategy,
            move || async move {
                let result = backend.complete(system, user, model).await;
                if let Err(ref e) = result {
                    warn!(?mode, model, error = %e, "Summarization call failed");
                }
                result
            },
            |e: &SummaryError| !matches!(e, SummaryError::Cancelled),
        )
        .await
    }
}
