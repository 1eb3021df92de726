//! AirWaveThess report dashboard
//!
//! Air quality for the municipalities around Thessaloniki and sea water
//! quality for the port, drawn on a Leaflet map.
//!
//! Data flow:
//! 1. On mount: fetch the locations once and load the map/chart scripts.
//! 2. On date range change: validate the inputs, then fetch the report.
//!    Invalid input never reaches the server. Only the response to the most
//!    recent request is applied; errors show in the filter panel and the
//!    previous report stays on screen.
//! 3. The map, story stepper, comparison table and trend charts all derive
//!    from the report and the view state.

use awt_core::api::{load_report, ApiClient};
use awt_core::config::ApiConfig;
use awt_data::view_mode::ViewMode;
use awt_ui::components::{
    ChatWidget, ComparisonTable, HistoryChart, HistoryKind, LoadingSpinner, LocationMap,
    MapLegend, ReportFilters, StoryStepper,
};
use awt_ui::js_bridge;
use awt_ui::state::AppState;
use dioxus::prelude::*;
use log::{debug, error};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const D3_JS: &str = "https://cdn.jsdelivr.net/npm/d3@7";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("awt-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_context_provider(|| ApiClient::new(ApiConfig::from_build_env()));

    // ─── Effect 1: locations and scripts, once on mount ───
    use_effect({
        let client = client.clone();
        move || {
            js_bridge::init_scripts();
            let client = client.clone();
            spawn(async move {
                match client.get_locations().await {
                    Ok(locations) => state.locations.set(locations),
                    Err(e) => {
                        error!("Failed to load locations: {}", e);
                        state
                            .errors
                            .write()
                            .set_locations_error(format!("Failed to load locations: {}", e));
                    }
                }
            });
        }
    });

    // ─── Effect 2: report for the selected date range ───
    // Re-runs whenever date_from or date_to change.
    use_effect(move || {
        let from = (state.date_from)();
        let to = (state.date_to)();
        let generation = state.generation.write().begin();
        let client = client.clone();
        state.loading.set(true);

        spawn(async move {
            let result = load_report(&client, &from, &to).await;
            if !state.generation.peek().is_current(generation) {
                debug!("Dropping stale report response #{}", generation);
                return;
            }
            match result {
                Ok(report) => {
                    state.view.write().apply_report(&report);
                    state.report.set(Some(report));
                    state.errors.write().set_report_error(None);
                }
                Err(message) => state.errors.write().set_report_error(Some(message)),
            }
            state.loading.set(false);
        });
    });

    let has_report = state.report.read().is_some();
    let loading = (state.loading)();
    let mode = state.view.read().mode();

    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        document::Script { src: D3_JS }

        div {
            style: "max-width: 1280px; margin: 0 auto; padding: 8px 16px 100px 16px; font-family: system-ui, -apple-system, sans-serif;",

            h1 { style: "margin: 8px 0 4px 0;", "AirWaveThess Report Creation" }
            p {
                style: "margin: 0; color: #444;",
                "In this page you can create a report regarding sea water and air quality of Thessaloniki!"
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; margin-top: 24px;",
                ReportFilters {}
                div {
                    style: "flex: 2; min-width: 320px;",
                    if has_report {
                        if loading {
                            p { style: "font-size: 12px; color: #888; margin: 0;", "Updating report..." }
                        }
                        StoryStepper {}
                        LocationMap {}
                        MapLegend {}
                    } else {
                        LoadingSpinner {}
                    }
                }
            }

            if has_report {
                if mode == ViewMode::Compare {
                    ComparisonTable {}
                }
                h3 { style: "margin: 32px 0 0 0;", "Trends" }
                HistoryChart { kind: HistoryKind::Air }
                HistoryChart { kind: HistoryKind::Water }
            }
        }

        ChatWidget {}
    }
}
