//! "From" and "To" date inputs driving the report query.

use crate::state::AppState;
use dioxus::prelude::*;

/// Date range inputs. Values are stored raw; validation happens when the
/// report is requested, so an empty or inverted range shows an inline error
/// instead of a request.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let from = (state.date_from)();
    let to = (state.date_to)();

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            label {
                style: "display: flex; flex-direction: column; font-size: 12px; color: #555; flex: 1;",
                "From date"
                input {
                    r#type: "date",
                    value: "{from}",
                    max: "{to}",
                    onchange: move |evt: Event<FormData>| state.date_from.set(evt.value()),
                }
            }
            label {
                style: "display: flex; flex-direction: column; font-size: 12px; color: #555; flex: 1;",
                "To date"
                input {
                    r#type: "date",
                    value: "{to}",
                    min: "{from}",
                    onchange: move |evt: Event<FormData>| state.date_to.set(evt.value()),
                }
            }
        }
    }
}
