//! Radio group switching between data, story and compare mode.

use crate::state::AppState;
use awt_data::view_mode::ViewMode;
use dioxus::prelude::*;
use log::warn;

#[component]
pub fn ViewModeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.view.read().mode();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<ViewMode>() {
        Ok(mode) => state.view.write().set_mode(mode),
        Err(e) => warn!("{}", e),
    };

    rsx! {
        fieldset {
            style: "border: none; padding: 0; margin: 0;",
            legend { style: "font-weight: bold; margin-bottom: 4px;", "View Mode" }
            for mode in ViewMode::ALL {
                label {
                    key: "{mode}",
                    style: "display: block; margin: 2px 0; cursor: pointer;",
                    input {
                        r#type: "radio",
                        name: "view-mode",
                        value: "{mode}",
                        checked: mode == current,
                        onchange: on_change,
                    }
                    " "
                    {mode.label()}
                }
            }
        }
    }
}
