//! Leaflet map of the active locations, coloured by their quality index.

use crate::js_bridge;
use crate::state::AppState;
use awt_data::map::{build_map_layer, MapOptions};
use dioxus::prelude::*;
use log::{debug, error};

/// DOM id for the Leaflet map container.
pub const MAP_CONTAINER_ID: &str = "awt-location-map";

/// Redraws the polygon layer whenever the locations, the report or the view
/// change. Locations without a record in the current view are not drawn.
#[component]
pub fn LocationMap(#[props(default = 700)] height: u32) -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let locations = state.locations.read();
        let report = state.report.read();
        let view = state.view.read();
        let Some(report) = report.as_ref() else {
            return;
        };

        let shapes = build_map_layer(&locations, report, &view);
        debug!("Drawing {} of {} locations", shapes.len(), locations.len());
        match (
            serde_json::to_string(&shapes),
            serde_json::to_string(&MapOptions::default()),
        ) {
            (Ok(shapes), Ok(options)) => {
                js_bridge::render_location_map(MAP_CONTAINER_ID, &shapes, &options)
            }
            (Err(e), _) | (_, Err(e)) => error!("Could not serialize map layer: {}", e),
        }
    });

    use_drop(|| js_bridge::destroy_location_map(MAP_CONTAINER_ID));

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            style: "height: {height}px; width: 100%; background: transparent;",
        }
    }
}
