//! Floating chat with the report assistant.

use super::ErrorDisplay;
use crate::state::AppState;
use awt_core::api::ApiClient;
use awt_core::chat::{prepare_send, ChatError, MessageRole};
use dioxus::prelude::*;
use log::warn;

fn bubble_row_style(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "display: flex; justify-content: flex-end; margin-bottom: 6px;",
        MessageRole::Assistant => "display: flex; justify-content: flex-start; margin-bottom: 6px;",
    }
}

/// Toggle button plus a chat panel. Each send posts the whole conversation
/// and replaces it with the server's reply; one request at a time.
#[component]
pub fn ChatWidget() -> Element {
    let mut state = use_context::<AppState>();
    let client = use_context::<ApiClient>();
    let mut open = use_signal(|| false);
    let mut input = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let send = use_callback(move |_: ()| {
        let conversation = match prepare_send(&state.chat_messages.read(), &input.read(), busy()) {
            Ok(conversation) => conversation,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        input.set(String::new());
        state.chat_messages.set(conversation.clone());
        busy.set(true);

        let client = client.clone();
        spawn(async move {
            match client.send_chat(&conversation).await {
                Ok(messages) => state.chat_messages.set(messages),
                Err(e) => {
                    warn!("Chat request failed: {}", e);
                    error.set(Some(ChatError::Connection.to_string()));
                }
            }
            busy.set(false);
        });
    });

    let messages = state.chat_messages.read().clone();
    let panel_display = if open() { "flex" } else { "none" };

    rsx! {
        button {
            style: "position: fixed; z-index: 1100; bottom: 40px; right: 40px; width: 64px; height: 64px; border-radius: 50%; border: 2px solid #000; background: #109ea2; color: white; font-size: 14px; cursor: pointer; box-shadow: 0 0 10px rgba(0,0,0,0.5);",
            title: "Assistant",
            onclick: move |_| open.set(!open()),
            "Chat"
        }
        div {
            style: "display: {panel_display}; flex-direction: column; position: fixed; z-index: 1000; bottom: 120px; right: 40px; width: 380px; height: 420px; padding: 16px; background: white; border-radius: 8px; box-shadow: 0 2px 12px rgba(0,0,0,0.25);",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h4 { style: "margin: 0;", "Chat with Assistant" }
                button {
                    style: "border: none; background: transparent; cursor: pointer; font-size: 18px;",
                    title: "Close",
                    onclick: move |_| open.set(false),
                    "×"
                }
            }
            if let Some(message) = error() {
                ErrorDisplay { message: message }
            }
            div {
                style: "flex: 1; overflow-y: auto; margin: 8px 0;",
                for (i, message) in messages.iter().enumerate() {
                    div {
                        key: "{i}",
                        style: bubble_row_style(message.role),
                        span {
                            style: "max-width: 80%; padding: 6px 10px; border-radius: 8px; border: 1px solid #109ea2; font-size: 14px; white-space: pre-wrap;",
                            "{message.content}"
                        }
                    }
                }
            }
            div {
                style: "display: flex; gap: 6px;",
                input {
                    style: "flex: 1; padding: 6px;",
                    placeholder: "Type your message...",
                    value: "{input}",
                    oninput: move |evt: Event<FormData>| input.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            send.call(());
                        }
                    },
                }
                button {
                    disabled: input.read().trim().is_empty() || busy(),
                    onclick: move |_| send.call(()),
                    "Send"
                }
            }
        }
    }
}
