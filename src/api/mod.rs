//! Request/response boundary for the summarization pipeline

pub mod handler;
pub mod helpers;

// Re-export the main handler for convenience
pub use handler::handle_summarize;
