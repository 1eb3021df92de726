//! One-shot question to the assistant.

use awt_core::api::ApiClient;
use awt_core::chat::{prepare_send, ChatError, ChatMessage, MessageRole};
use log::warn;

/// The assistant's last reply in a conversation, if any.
pub fn last_reply(messages: &[ChatMessage]) -> Option<&str> {
    messages
        .iter()
        .rev()
        .find(|m| m.role == MessageRole::Assistant)
        .map(|m| m.content.as_str())
}

pub async fn run_chat(client: &ApiClient, prompt: &str) -> anyhow::Result<()> {
    let conversation = prepare_send(&ChatMessage::conversation(), prompt, false)?;
    let messages = client.send_chat(&conversation).await.map_err(|e| {
        warn!("Chat request failed: {}", e);
        ChatError::Connection
    })?;
    match last_reply(&messages[conversation.len().min(messages.len())..]) {
        Some(reply) => println!("{}", reply),
        None => warn!("The assistant did not reply"),
    }
    Ok(())
}
