//! The ChatBackend trait definition.

use async_trait::async_trait;

use crate::error::ChatError;
use crate::message::ChatMessage;
use crate::options::CompletionOptions;

/// A trait for sending a message sequence to a chat-completion endpoint.
///
/// Implementations range from remote OpenAI-compatible APIs to a local
/// Ollama instance to scripted test doubles. The trait is object-safe and
/// can be used with `Arc<dyn ChatBackend>`.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send the message sequence and return the reply text.
    ///
    /// # Arguments
    ///
    /// * `messages` - Ordered conversation passed wholesale to the model.
    /// * `options` - Sampling parameters for this call.
    ///
    /// # Returns
    ///
    /// The reply text, or a [`ChatError`] describing exactly what went
    /// wrong. A structurally valid response with no content must surface
    /// as [`ChatError::EmptyReply`], never as `Ok("")`.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String, ChatError>;

    /// Get a human-readable name for this backend.
    fn name(&self) -> &str;
}
