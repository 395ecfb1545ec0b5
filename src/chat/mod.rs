//! Chat form model and submission handling.
//!
//! The form carries a message plus a set of document-mention references.
//! Validation happens both in markup (`required`) and here on the server;
//! submissions go to whatever [`ChatHandler`] the application state was
//! built with, and the form resets afterwards regardless of the handler's
//! outcome.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::CollectionApi;

/// Validation message for an empty chat message.
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Fixed suggestion chips shown while the message field is empty.
pub const SUGGESTIONS: &[&str] = &["Introduce me to this collections", "Find me X"];

/// A chat form submission: the message plus mention references.
///
/// `reference` order carries no meaning beyond display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatSubmission {
    #[serde(default)]
    pub chat_message: String,
    #[serde(default)]
    pub reference: Vec<String>,
}

/// Rejection reasons for a chat submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatFormError {
    #[error("Message is required")]
    MessageRequired,
}

impl ChatSubmission {
    /// Server-side validation mirroring the form's `required` attribute:
    /// the message must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), ChatFormError> {
        if self.chat_message.trim().is_empty() {
            return Err(ChatFormError::MessageRequired);
        }
        Ok(())
    }
}

/// Receiver for validated chat submissions.
///
/// The form component does not care where messages go; the caller wires in
/// an implementation through `AppState`.
#[async_trait]
pub trait ChatHandler: Send + Sync {
    async fn handle(&self, collection_id: &str, submission: ChatSubmission) -> anyhow::Result<()>;
}

/// Default handler: forwards submissions to the remote collection API.
#[derive(Clone)]
pub struct ApiChatHandler {
    api: Arc<dyn CollectionApi>,
}

impl std::fmt::Debug for ApiChatHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiChatHandler").finish()
    }
}

impl ApiChatHandler {
    #[must_use]
    pub fn new(api: Arc<dyn CollectionApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ChatHandler for ApiChatHandler {
    async fn handle(&self, collection_id: &str, submission: ChatSubmission) -> anyhow::Result<()> {
        self.api.send_chat(collection_id, &submission).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_rejected() {
        let submission = ChatSubmission::default();
        assert_eq!(submission.validate(), Err(ChatFormError::MessageRequired));
        assert_eq!(
            ChatFormError::MessageRequired.to_string(),
            MESSAGE_REQUIRED
        );
    }

    #[test]
    fn test_whitespace_only_message_rejected() {
        let submission = ChatSubmission {
            chat_message: "   \n\t".to_string(),
            reference: Vec::new(),
        };
        assert_eq!(submission.validate(), Err(ChatFormError::MessageRequired));
    }

    #[test]
    fn test_valid_message_accepted() {
        let submission = ChatSubmission {
            chat_message: "hello".to_string(),
            reference: vec!["doc-1".to_string()],
        };
        assert!(submission.validate().is_ok());
    }
}
