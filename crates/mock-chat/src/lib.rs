//! Test-double chat backends.
//!
//! These implementations of [`chat_core::ChatBackend`] let orchestrator tests
//! script model behavior and assert on exactly which calls were made:
//!
//! - [`ScriptedChat`] - Returns queued outcomes in order and records every
//!   message sequence it receives
//! - [`FailingChat`] - Always fails with a network error

mod failing;
mod scripted;

pub use failing::FailingChat;
pub use scripted::ScriptedChat;
