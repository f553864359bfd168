//! Completion provider abstraction.
//!
//! [`CompletionProvider`] is the seam between the HTTP handlers and the
//! external chat-completion API. Handlers depend on the trait object, so
//! tests can substitute fake providers without touching the network.

pub mod openrouter;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// A single message in a chat-completion conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role: "system" or "user".
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Build a system-role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Build a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Abstract chat-completion provider.
///
/// Implementations handle credentials, transport, and response parsing, and
/// map every failure onto a [`RelayError`] variant. A well-formed provider
/// response that carries no choices is not an error: it yields `Ok(None)`
/// and the caller substitutes a fallback message.
#[async_trait]
pub trait CompletionProvider: Send + Sync + fmt::Debug {
    /// Run one completion over the given conversation.
    ///
    /// Returns the first choice's raw content, or `None` when the provider
    /// answered without choices.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Option<String>, RelayError>;
}
