//! Scripted `LlmCapability` double for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{LlmCapability, LlmError};

/// Replays queued replies in order and records every prompt it receives.
/// Once the queue is empty, every further call fails with `EmptyContent`.
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<Result<Value, LlmError>>>,
    prompts: Mutex<Vec<(String, String)>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl ScriptedLlm {
    pub fn new(replies: Vec<Result<Value, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            delay: None,
        }
    }

    /// A model that never answers successfully.
    pub fn failing() -> Self {
        Self::new(Vec::new())
    }

    /// Sleeps for `delay` before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(system, prompt)` pairs in call order.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmCapability for ScriptedLlm {
    async fn complete_json(&self, system: &str, prompt: &str) -> Result<Value, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}
