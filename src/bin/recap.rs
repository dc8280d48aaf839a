//! Command-line entry point: summarize a plain-text document.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{error, info};

use recap::ai::{LlmClient, Summarizer};
use recap::api::handler::handle_summarize_with_cancel;
use recap::core::config::AppConfig;
use recap::pipeline::{CancelToken, Pipeline};

#[derive(Debug, Parser)]
#[command(name = "recap", about = "Summarize a long document with hierarchical map-reduce")]
struct Args {
    /// UTF-8 text file to summarize
    file: PathBuf,

    /// Instruction guiding the summary
    #[arg(short, long)]
    prompt: String,

    /// Characters per chunk
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Concurrent model calls per batch
    #[arg(long)]
    batch_size: Option<usize>,

    /// Summaries combined per reduction group
    #[arg(long)]
    group_size: Option<usize>,

    /// Delay between batches in milliseconds
    #[arg(long)]
    pacing_ms: Option<u64>,

    /// Print the boundary JSON response instead of the bare summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    recap::setup_logging();
    let args = Args::parse();

    let mut config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow::anyhow!(e)
    })?;
    if let Some(chunk_size) = args.chunk_size {
        config.pipeline.chunk_size = chunk_size;
    }
    if let Some(batch_size) = args.batch_size {
        config.pipeline.batch_size = batch_size;
    }
    if let Some(group_size) = args.group_size {
        config.pipeline.group_size = group_size;
    }
    if let Some(pacing_ms) = args.pacing_ms {
        config.pipeline.pacing_delay = Duration::from_millis(pacing_ms);
    }

    let transcript = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let backend = LlmClient::new(
        config.api_key.clone(),
        config.base_url.clone(),
        config.request_timeout,
    )?;
    let summarizer = Summarizer::from_config(Arc::new(backend), &config.pipeline);
    let pipeline = Pipeline::new(summarizer, config.pipeline.clone())?;

    let cancel = CancelToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, no further batches will be dispatched");
            on_signal.cancel();
        }
    });

    if args.json {
        let payload = json!({ "transcript": transcript, "prompt": args.prompt });
        let response = handle_summarize_with_cancel(&pipeline, &payload, &cancel).await;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let summary = pipeline
        .summarize_document_with_cancel(&transcript, &args.prompt, &cancel)
        .await?;
    println!("{summary}");
    Ok(())
}
