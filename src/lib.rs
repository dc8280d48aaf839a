//! recap - hierarchical map-reduce summarization of long documents with an LLM.
//!
//! A document is split into fixed-size chunks, each chunk is summarized in
//! rate-limited concurrent batches, and the resulting summaries are combined
//! group by group until a single markdown summary remains.
//!
//! # Architecture
//!
//! The crate uses:
//! - an OpenAI-compatible chat-completions API (Groq by default) via reqwest
//! - openai-api-rs message types for prompt construction
//! - Tokio for async runtime, pacing and cancellation
//! - tracing for structured logs correlated by run id
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use recap::ai::{LlmClient, Summarizer};
//! use recap::core::config::AppConfig;
//! use recap::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     recap::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let backend = LlmClient::new(
//!         config.api_key.clone(),
//!         config.base_url.clone(),
//!         config.request_timeout,
//!     )?;
//!     let summarizer = Summarizer::from_config(Arc::new(backend), &config.pipeline);
//!     let pipeline = Pipeline::new(summarizer, config.pipeline.clone())?;
//!
//!     let transcript = std::fs::read_to_string("meeting.txt")?;
//!     let summary = pipeline
//!         .summarize_document(&transcript, "Summarize decisions and owners")
//!         .await?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod pipeline;

pub use errors::SummaryError;
pub use pipeline::Pipeline;

/// Configure structured logging with JSON format.
///
/// Honors `RUST_LOG` and defaults to `info`. Calling it more than once is
/// harmless; only the first call installs a subscriber.
///
/// # Example
///
/// ```
/// recap::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
