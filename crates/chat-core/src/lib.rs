//! Core trait and types for chat-completion backends.
//!
//! This crate provides the shared interface for every chat backend in the
//! platform. It defines:
//!
//! - [`ChatBackend`] - The trait that all backends must implement
//! - [`ChatMessage`] - A role-tagged message in a conversation
//! - [`CompletionOptions`] - Per-call sampling parameters
//! - [`ChatError`] - Error types for backend operations
//!
//! Failures stay explicit at this layer: an unreachable endpoint, a non-success
//! status, and a reply with no content are all distinct [`ChatError`] variants.
//! Deciding whether to mask a failure with a user-facing fallback is the
//! caller's job, not the backend's.
//!
//! # Example
//!
//! ```rust
//! use chat_core::{ChatBackend, ChatError, ChatMessage, CompletionOptions};
//! use async_trait::async_trait;
//!
//! struct MyBackend;
//!
//! #[async_trait]
//! impl ChatBackend for MyBackend {
//!     async fn complete(
//!         &self,
//!         _messages: &[ChatMessage],
//!         _options: &CompletionOptions,
//!     ) -> Result<String, ChatError> {
//!         Ok("Hello!".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyBackend"
//!     }
//! }
//! ```

mod error;
mod message;
mod options;
mod trait_def;

pub use error::ChatError;
pub use message::ChatMessage;
pub use options::CompletionOptions;
pub use trait_def::ChatBackend;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
