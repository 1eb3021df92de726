use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First message shown in a fresh conversation.
pub const GREETING: &str = "Hello! How can I assist you today?";

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One message of a conversation with the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    /// A conversation containing only the assistant greeting.
    pub fn conversation() -> Vec<ChatMessage> {
        vec![ChatMessage::assistant(GREETING)]
    }
}

/// Reasons a chat message is not sent or gets no reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Please enter a prompt.")]
    EmptyPrompt,
    #[error("Please wait for the assistant to finish.")]
    Busy,
    #[error("An error occurred while connecting to the server.")]
    Connection,
}

/// Check a prompt before sending it. Returns the conversation to send: the
/// existing messages followed by the new user message.
pub fn prepare_send(
    messages: &[ChatMessage],
    input: &str,
    busy: bool,
) -> Result<Vec<ChatMessage>, ChatError> {
    if input.trim().is_empty() {
        return Err(ChatError::EmptyPrompt);
    }
    if busy {
        return Err(ChatError::Busy);
    }
    let mut conversation = messages.to_vec();
    conversation.push(ChatMessage::user(input));
    Ok(conversation)
}
