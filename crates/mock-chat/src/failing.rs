//! Failing chat backend - every call is a transport error.

use std::sync::atomic::{AtomicUsize, Ordering};

use chat_core::{async_trait, ChatBackend, ChatError, ChatMessage, CompletionOptions};

/// A backend whose every call fails with [`ChatError::Network`].
///
/// Useful for testing that orchestrators mask upstream failures instead of
/// leaking them to callers.
#[derive(Debug, Default)]
pub struct FailingChat {
    calls: AtomicUsize,
}

impl FailingChat {
    /// Create a new failing backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatBackend for FailingChat {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _options: &CompletionOptions,
    ) -> Result<String, ChatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ChatError::Network("connection refused".to_string()))
    }

    fn name(&self) -> &str {
        "FailingChat"
    }
}
