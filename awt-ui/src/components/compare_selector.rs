//! Picker for the locations shown in compare mode.

use crate::state::AppState;
use awt_data::view_mode::compare_options;
use dioxus::prelude::*;

/// One checkbox per air quality location. The port is never offered since
/// the comparison only covers air quality.
#[component]
pub fn CompareSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = compare_options(&state.locations.read());
    let selected = state.view.read().compare_locations().to_vec();

    rsx! {
        div {
            h4 { style: "margin: 12px 0 4px 0;", "Locations to Compare" }
            if options.is_empty() {
                p { style: "font-size: 12px; color: #888;", "No locations available." }
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 2px 12px; font-size: 13px;",
                for name in options {
                    label {
                        key: "{name}",
                        style: "cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: selected.contains(&name),
                            onchange: move |_| state.view.write().toggle_compare_location(name),
                        }
                        " {name}"
                    }
                }
            }
        }
    }
}
