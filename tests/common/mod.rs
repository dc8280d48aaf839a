#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use recap::ai::CompletionBackend;
use recap::core::config::PipelineConfig;
use recap::errors::SummaryError;

pub const LEAF_MODEL: &str = "fast-model";
pub const COMBINE_MODEL: &str = "big-model";

type Responder = Box<dyn Fn(&str, &str) -> String + Send + Sync>;
type FailurePredicate = Box<dyn Fn(&str, usize) -> bool + Send + Sync>;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
    pub model: String,
}

/// In-memory stand-in for the language model service.
pub struct FakeBackend {
    calls: Mutex<Vec<RecordedCall>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    delay: Duration,
    responder: Responder,
    fail_when: Option<FailurePredicate>,
    empty_replies: bool,
}

impl FakeBackend {
    /// Answers every call with `<model>#<call index>`.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            delay: Duration::ZERO,
            responder: Box::new(|_: &str, model: &str| model.to_string()),
            fail_when: None,
            empty_replies: false,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_responder<F>(mut self, responder: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.responder = Box::new(responder);
        self
    }

    /// Answer every call with no content at all.
    pub fn answering_empty(mut self) -> Self {
        self.empty_replies = true;
        self
    }

    /// Fail a call when `predicate(user_content, call_index)` is true.
    pub fn failing_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str, usize) -> bool + Send + Sync + 'static,
    {
        self.fail_when = Some(Box::new(predicate));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mutex poisoned").clone()
    }

    pub fn calls_for(&self, model: &str) -> usize {
        self.calls().iter().filter(|c| c.model == model).count()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for FakeBackend {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        model: &str,
    ) -> Result<String, SummaryError> {
        let index = {
            let mut calls = self.calls.lock().expect("mutex poisoned");
            calls.push(RecordedCall {
                system: system.to_string(),
                user: user.to_string(),
                model: model.to_string(),
            });
            calls.len() - 1
        };

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(fail) = &self.fail_when
            && fail(user, index)
        {
            return Err(SummaryError::LlmError("rate limit exceeded".to_string()));
        }

        if self.empty_replies {
            return Ok(String::new());
        }
        Ok(format!("{}#{}", (self.responder)(user, model), index))
    }
}

/// The fragment text embedded in a summarization request.
pub fn fragment_of(user: &str) -> &str {
    user.split_once("Text to process:\n\"")
        .map(|(_, rest)| rest.strip_suffix('"').unwrap_or(rest))
        .unwrap_or(user)
}

pub fn test_config() -> PipelineConfig {
    PipelineConfig {
        chunk_size: 10,
        batch_size: 5,
        group_size: 5,
        pacing_delay: Duration::from_millis(1000),
        leaf_model: LEAF_MODEL.to_string(),
        combine_model: COMBINE_MODEL.to_string(),
        max_retries: 0,
    }
}
