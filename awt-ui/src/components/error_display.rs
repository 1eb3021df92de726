//! Inline alert banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a close button when set.
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

/// Error banner scoped to the panel it sits in; the rest of the page stays usable.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 12px; margin: 8px 0; background: #FDECEA; color: #611A15; border-radius: 4px; border: 1px solid #F5C2C0;",
            span { "{props.message}" }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    style: "border: none; background: transparent; cursor: pointer; font-size: 16px; color: inherit;",
                    title: "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}
