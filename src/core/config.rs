use std::env;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::errors::SummaryError;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_LEAF_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_COMBINE_MODEL: &str = "llama3-70b-8192";

pub const DEFAULT_CHUNK_SIZE: usize = 10_000;
pub const DEFAULT_BATCH_SIZE: usize = 5;
pub const DEFAULT_GROUP_SIZE: usize = 5;
pub const DEFAULT_PACING_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Tuning knobs for one summarization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Characters per leaf chunk.
    pub chunk_size: usize,
    /// Maximum concurrent model calls per batch.
    pub batch_size: usize,
    /// Summaries combined per reduction group.
    pub group_size: usize,
    /// Fixed wait between consecutive batches.
    pub pacing_delay: Duration,
    pub leaf_model: String,
    pub combine_model: String,
    /// Extra attempts per model call. Zero keeps the all-or-nothing baseline.
    pub max_retries: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
            group_size: DEFAULT_GROUP_SIZE,
            pacing_delay: DEFAULT_PACING_DELAY,
            leaf_model: DEFAULT_LEAF_MODEL.to_string(),
            combine_model: DEFAULT_COMBINE_MODEL.to_string(),
            max_retries: 0,
        }
    }
}

impl PipelineConfig {
    /// # Errors
    ///
    /// Returns `SummaryError::ConfigError` when a size would make chunking,
    /// batching or reduction ill-defined, or a model id is blank.
    pub fn validate(&self) -> Result<(), SummaryError> {
        if self.chunk_size == 0 {
            return Err(SummaryError::ConfigError(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(SummaryError::ConfigError(
                "batch size must be greater than zero".to_string(),
            ));
        }
        if self.group_size < 2 {
            return Err(SummaryError::ConfigError(format!(
                "group size must be at least 2, got {}",
                self.group_size
            )));
        }
        if self.leaf_model.trim().is_empty() || self.combine_model.trim().is_empty() {
            return Err(SummaryError::ConfigError(
                "model identifiers must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
    pub pipeline: PipelineConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| format!("GROQ_BASE_URL: {}", e))?;

        let defaults = PipelineConfig::default();
        let pipeline = PipelineConfig {
            chunk_size: parse_var("RECAP_CHUNK_SIZE", defaults.chunk_size)?,
            batch_size: parse_var("RECAP_BATCH_SIZE", defaults.batch_size)?,
            group_size: parse_var("RECAP_GROUP_SIZE", defaults.group_size)?,
            pacing_delay: Duration::from_millis(parse_var(
                "RECAP_PACING_DELAY_MS",
                u64::try_from(defaults.pacing_delay.as_millis()).unwrap_or(1000),
            )?),
            leaf_model: env::var("RECAP_LEAF_MODEL").unwrap_or(defaults.leaf_model),
            combine_model: env::var("RECAP_COMBINE_MODEL").unwrap_or(defaults.combine_model),
            max_retries: parse_var("RECAP_MAX_RETRIES", defaults.max_retries)?,
        };
        pipeline.validate().map_err(|e| e.to_string())?;

        Ok(Self {
            api_key: env::var("GROQ_API_KEY").map_err(|e| format!("GROQ_API_KEY: {}", e))?,
            base_url,
            request_timeout: Duration::from_secs(parse_var(
                "RECAP_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT.as_secs(),
            )?),
            pipeline,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("{}: {}", name, e)),
        Err(_) => Ok(default),
    }
}
