use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::cancel::CancelToken;
use super::chunker::chunk_text;
use super::reduce::reduce_summaries;
use super::scheduler::run_batched;
use crate::ai::Summarizer;
use crate::core::config::PipelineConfig;
use crate::core::models::SummaryMode;
use crate::errors::SummaryError;

/// Entry point for summarizing one document: chunk, summarize the chunks in
/// paced batches, then reduce the leaf summaries to a single summary.
#[derive(Clone)]
pub struct Pipeline {
    summarizer: Summarizer,
    config: PipelineConfig,
}

impl Pipeline {
    /// # Errors
    ///
    /// Returns `SummaryError::ConfigError` if `config` fails validation.
    pub fn new(summarizer: Summarizer, config: PipelineConfig) -> Result<Self, SummaryError> {
        config.validate()?;
        Ok(Self { summarizer, config })
    }

    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// # Errors
    ///
    /// See [`Pipeline::summarize_document_with_cancel`].
    pub async fn summarize_document(
        &self,
        text: &str,
        instruction: &str,
    ) -> Result<String, SummaryError> {
        self.summarize_document_with_cancel(text, instruction, &CancelToken::new())
            .await
    }

    /// Summarize `text` under `instruction`, stopping at the next batch
    /// boundary once `cancel` fires.
    ///
    /// # Errors
    ///
    /// - `ValidationError` when `text` or `instruction` is empty (no calls made)
    /// - the first summarization failure at any level; earlier results are discarded
    /// - `Cancelled` when `cancel` fires before the run completes
    pub async fn summarize_document_with_cancel(
        &self,
        text: &str,
        instruction: &str,
        cancel: &CancelToken,
    ) -> Result<String, SummaryError> {
        if text.is_empty() || instruction.is_empty() {
            return Err(SummaryError::ValidationError(
                "Transcript and prompt are required.".to_string(),
            ));
        }

        let run_id = Uuid::new_v4();
        let span = info_span!("summarize_document", %run_id);

        async {
            let result = self.run(text, instruction, cancel).await;
            if let Err(ref e) = result {
                error!(error = %e, "Summarization pipeline failed");
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        text: &str,
        instruction: &str,
        cancel: &CancelToken,
    ) -> Result<String, SummaryError> {
        let chunks = chunk_text(text, self.config.chunk_size)?;
        info!(
            input_chars = text.chars().count(),
            chunks = chunks.len(),
            chunk_size = self.config.chunk_size,
            "Document chunked"
        );

        let summarizer = &self.summarizer;
        let leaf_summaries = run_batched(
            chunks,
            self.config.batch_size,
            self.config.pacing_delay,
            cancel,
            |chunk: String| async move {
                summarizer
                    .summarize(&chunk, instruction, SummaryMode::Leaf)
                    .await
            },
        )
        .await?;
        info!(leaf_summaries = leaf_summaries.len(), "Leaf summarization finished");

        reduce_summaries(summarizer, leaf_summaries, instruction, &self.config, cancel).await
    }
}
