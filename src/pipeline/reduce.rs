//! Reduction tree: repeatedly combine groups of summaries until one is left.

use tracing::info;

use super::cancel::CancelToken;
use super::scheduler::run_batched;
use crate::ai::Summarizer;
use crate::core::config::PipelineConfig;
use crate::core::models::SummaryMode;
use crate::errors::SummaryError;

/// Placed between summaries joined into one combine-mode input.
pub const GROUP_SEPARATOR: &str = "\n\n---\n\n";

/// Returned when reduction ends with no summary or an empty one.
pub const FALLBACK_SUMMARY: &str = "Sorry, I could not generate a final summary.";

/// Join consecutive runs of at most `group_size` summaries with
/// [`GROUP_SEPARATOR`]. A trailing run of one is still its own group.
#[must_use]
pub fn group_summaries(summaries: &[String], group_size: usize) -> Vec<String> {
    summaries
        .chunks(group_size.max(1))
        .map(|group| group.join(GROUP_SEPARATOR))
        .collect()
}

/// Combine `summaries` level by level until exactly one remains.
///
/// A single input summary is returned as is (no combine call). An empty input,
/// or a final summary the model left empty, yields [`FALLBACK_SUMMARY`] rather
/// than an error. Each level finishes completely before the next one starts.
///
/// # Errors
///
/// Fails with `SummaryError::ConfigError` when `group_size < 2`, and with the
/// first combine-call failure or cancellation at any level.
pub async fn reduce_summaries(
    summarizer: &Summarizer,
    summaries: Vec<String>,
    instruction: &str,
    config: &PipelineConfig,
    cancel: &CancelToken,
) -> Result<String, SummaryError> {
    if config.group_size < 2 {
        return Err(SummaryError::ConfigError(format!(
            "group size must be at least 2, got {}",
            config.group_size
        )));
    }

    let mut current = summaries;
    let mut level = 0usize;

    while current.len() > 1 {
        level += 1;
        let groups = group_summaries(&current, config.group_size);
        info!(
            level,
            input_summaries = current.len(),
            groups = groups.len(),
            "Starting reduction level"
        );

        current = run_batched(
            groups,
            config.batch_size,
            config.pacing_delay,
            cancel,
            |group: String| async move {
                summarizer
                    .summarize(&group, instruction, SummaryMode::Combine)
                    .await
            },
        )
        .await?;
    }

    info!(levels = level, "Reduction finished");
    Ok(current
        .pop()
        .filter(|summary| !summary.is_empty())
        .unwrap_or_else(|| FALLBACK_SUMMARY.to_string()))
}
