//! Mock bridge for testing without an R installation.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{HarvestError, Result};
use crate::foreign::RFrame;

use super::RBridge;

/// Bridge that replays queued frames (or errors) and records every
/// fragment it was asked to evaluate.
pub struct MockBridge {
    queue: Mutex<VecDeque<Result<RFrame>>>,
    fragments: Mutex<Vec<String>>,
}

impl MockBridge {
    /// Create an empty mock bridge.
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fragments: Mutex::new(Vec::new()),
        }
    }

    /// Queue a frame to return from the next evaluation (builder style).
    pub fn with_frame(self, frame: RFrame) -> Self {
        self.push_frame(frame);
        self
    }

    /// Queue a bridge error (builder style).
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.push_error(message);
        self
    }

    /// Queue a frame to return from the next evaluation.
    pub fn push_frame(&self, frame: RFrame) {
        self.queue
            .lock()
            .expect("mock bridge queue lock poisoned")
            .push_back(Ok(frame));
    }

    /// Queue a bridge error.
    pub fn push_error(&self, message: impl Into<String>) {
        self.queue
            .lock()
            .expect("mock bridge queue lock poisoned")
            .push_back(Err(HarvestError::Bridge(message.into())));
    }

    /// Fragments evaluated so far, in order.
    pub fn evaluated(&self) -> Vec<String> {
        self.fragments
            .lock()
            .expect("mock bridge fragment lock poisoned")
            .clone()
    }
}

impl Default for MockBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl RBridge for MockBridge {
    fn eval_frame(&self, fragment: &str) -> Result<RFrame> {
        self.fragments
            .lock()
            .expect("mock bridge fragment lock poisoned")
            .push(fragment.to_string());

        self.queue
            .lock()
            .expect("mock bridge queue lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(HarvestError::Bridge("mock bridge queue is empty".to_string())))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
