//! Hierarchical map-reduce summarization pipeline

pub mod cancel;
pub mod chunker;
pub mod orchestrator;
pub mod reduce;
pub mod scheduler;

pub use cancel::CancelToken;
pub use chunker::chunk_text;
pub use orchestrator::Pipeline;
pub use reduce::{FALLBACK_SUMMARY, GROUP_SEPARATOR, group_summaries, reduce_summaries};
pub use scheduler::run_batched;
