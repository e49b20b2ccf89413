//! Scripted chat backend - replays queued outcomes.

use std::collections::VecDeque;
use std::sync::Mutex;

use chat_core::{async_trait, ChatBackend, ChatError, ChatMessage, CompletionOptions};

/// A backend that returns pre-queued outcomes in order.
///
/// Every call is recorded, so tests can assert both how many requests an
/// orchestrator made and exactly which messages each request carried.
///
/// # Example
///
/// ```rust
/// use chat_core::{ChatBackend, ChatMessage, CompletionOptions};
/// use mock_chat::ScriptedChat;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let chat = ScriptedChat::new();
/// chat.push_reply("Привет!");
///
/// let reply = chat
///     .complete(&[ChatMessage::user("hi")], &CompletionOptions::default())
///     .await
///     .unwrap();
/// assert_eq!(reply, "Привет!");
/// assert_eq!(chat.call_count(), 1);
/// # }
/// ```
#[derive(Default)]
pub struct ScriptedChat {
    outcomes: Mutex<VecDeque<Result<String, ChatError>>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedChat {
    /// Create a new backend with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn push_reply(&self, text: impl Into<String>) {
        self.outcomes.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: ChatError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All recorded message sequences, in call order.
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedChat {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _options: &CompletionOptions,
    ) -> Result<String, ChatError> {
        self.calls.lock().unwrap().push(messages.to_vec());

        // An exhausted script behaves like a model with nothing to say
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ChatError::EmptyReply))
    }

    fn name(&self) -> &str {
        "ScriptedChat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_in_queue_order() {
        let chat = ScriptedChat::new();
        chat.push_reply("first");
        chat.push_reply("second");

        let options = CompletionOptions::default();
        let first = chat.complete(&[ChatMessage::user("a")], &options).await;
        let second = chat.complete(&[ChatMessage::user("b")], &options).await;

        assert_eq!(first.unwrap(), "first");
        assert_eq!(second.unwrap(), "second");
        assert_eq!(chat.call_count(), 2);
    }

    #[tokio::test]
    async fn test_records_message_sequences() {
        let chat = ScriptedChat::new();
        chat.push_reply("ok");

        let messages = vec![ChatMessage::system("s"), ChatMessage::user("u")];
        chat.complete(&messages, &CompletionOptions::default())
            .await
            .unwrap();

        assert_eq!(chat.calls(), vec![messages]);
    }

    #[tokio::test]
    async fn test_exhausted_script_is_empty_reply() {
        let chat = ScriptedChat::new();

        let result = chat
            .complete(&[ChatMessage::user("a")], &CompletionOptions::default())
            .await;

        assert!(matches!(result, Err(ChatError::EmptyReply)));
    }
}
