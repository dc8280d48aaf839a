//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;
pub mod summarizer;

// Re-export main types for convenience
pub use client::{CompletionBackend, LlmClient, estimate_tokens};
pub use summarizer::Summarizer;
