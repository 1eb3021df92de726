//! Filter panel: date range, view mode and compare selection.

use super::{CompareSelector, DateRangePicker, ErrorDisplay, ViewModeSelector};
use crate::state::AppState;
use awt_data::view_mode::ViewMode;
use dioxus::prelude::*;

/// The left-hand panel. Location and report errors show here, under the
/// date inputs.
#[component]
pub fn ReportFilters() -> Element {
    let mut state = use_context::<AppState>();
    let mode = state.view.read().mode();
    let messages = state.errors.read().messages();

    rsx! {
        div {
            style: "flex: 1; min-width: 280px;",
            h3 { style: "margin: 0 0 8px 0;", "Date Range" }
            DateRangePicker {}
            for message in messages {
                ErrorDisplay {
                    key: "{message}",
                    message: message,
                    on_dismiss: move |_| state.errors.write().dismiss(),
                }
            }
            div { style: "margin-top: 12px;", ViewModeSelector {} }
            if mode == ViewMode::Compare {
                CompareSelector {}
            }
        }
    }
}
