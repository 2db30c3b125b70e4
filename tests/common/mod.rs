//! Shared test helpers and mock gateway.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use vellum::error::{Result, VellumError};
use vellum::gateway::ModelGateway;
use vellum::types::Turn;

/// A mock gateway that returns queued replies and captures every request.
///
/// Clones share the same queue, so tests can hand one clone to the
/// controller and keep another for inspection.
#[derive(Clone, Default)]
pub struct MockGateway {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    replies: Mutex<Vec<Result<String>>>,
    requests: Mutex<Vec<Vec<Turn>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn queue_reply(&self, text: &str) {
        self.inner.replies.lock().unwrap().push(Ok(text.to_string()));
    }

    /// Queue a transport failure.
    pub fn queue_error(&self, status: u16, message: &str) {
        self.inner
            .replies
            .lock()
            .unwrap()
            .push(Err(VellumError::api(status, message)));
    }

    /// Every context the gateway was called with, in order.
    pub fn requests(&self) -> Vec<Vec<Turn>> {
        self.inner.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelGateway for MockGateway {
    async fn send(&self, context: &[Turn]) -> Result<String> {
        self.inner.requests.lock().unwrap().push(context.to_vec());
        let mut replies = self.inner.replies.lock().unwrap();
        if replies.is_empty() {
            return Ok("<svg><rect/></svg>".to_string());
        }
        replies.remove(0)
    }
}
