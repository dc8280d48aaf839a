//! Batched fan-out/fan-in over independent async work items.
//!
//! Items run concurrently within a batch, batches run strictly one after
//! another with a fixed pacing delay in between. This is a static throttle
//! for an external rate limit; it does not adapt to feedback.

use std::future::Future;
use std::time::Duration;

use futures::future::try_join_all;
use tracing::{debug, info};

use super::cancel::CancelToken;
use crate::errors::SummaryError;

/// Run `worker` over `items` in consecutive batches of at most `batch_size`.
///
/// `result[i]` is always `worker(items[i])`, regardless of completion order.
/// The pacing delay is applied between batches, never after the last one.
///
/// # Errors
///
/// Fails with the first worker error of a batch; no partial results are
/// returned. Fails with `SummaryError::Cancelled` if `cancel` fires before a
/// batch is dispatched or during a pacing delay, and with
/// `SummaryError::ConfigError` when `batch_size` is zero.
pub async fn run_batched<T, R, F, Fut>(
    items: Vec<T>,
    batch_size: usize,
    pacing_delay: Duration,
    cancel: &CancelToken,
    worker: F,
) -> Result<Vec<R>, SummaryError>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R, SummaryError>>,
{
    if batch_size == 0 {
        return Err(SummaryError::ConfigError(
            "batch size must be greater than zero".to_string(),
        ));
    }

    let total = items.len();
    let batch_count = total.div_ceil(batch_size);
    let mut results = Vec::with_capacity(total);
    let mut remaining = items.into_iter().peekable();

    for batch_index in 0..batch_count {
        if cancel.is_cancelled() {
            info!(batch_index, batch_count, "Cancelled before dispatching batch");
            return Err(SummaryError::Cancelled);
        }

        let batch: Vec<T> = remaining.by_ref().take(batch_size).collect();
        debug!(batch_index, batch_count, batch_len = batch.len(), "Dispatching batch");

        let batch_results = try_join_all(batch.into_iter().map(&worker)).await?;
        results.extend(batch_results);

        if remaining.peek().is_some() && !pacing_delay.is_zero() {
            tokio::select! {
                () = tokio::time::sleep(pacing_delay) => {}
                () = cancel.cancelled() => {
                    info!(batch_index, batch_count, "Cancelled during pacing delay");
                    return Err(SummaryError::Cancelled);
                }
            }
        }
    }

    Ok(results)
}
