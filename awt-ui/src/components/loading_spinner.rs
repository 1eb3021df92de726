//! Loading indicator for the content area.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default = "Loading report...".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; min-height: 300px; color: #666;",
            "{label}"
        }
    }
}
