//! Map layer model handed to the Leaflet bridge.
//!
//! Geometry arrives as `(longitude, latitude)` and Leaflet wants
//! `[latitude, longitude]`, so every point is swapped here.

use crate::resolver::{resolve, QualityRecord};
use crate::view_mode::DashboardView;
use awt_core::location::{Coordinate, Location, LocationName};
use awt_core::report::Report;
use serde::Serialize;

/// Fixed map settings.
pub struct MapConfig;

impl MapConfig {
    /// Thessaloniki, as `[lat, lng]`.
    pub const CENTER: [f64; 2] = [40.68, 23.15];
    pub const ZOOM: f64 = 9.5;
    pub const TILE_URL: &'static str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
    pub const ATTRIBUTION: &'static str =
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
    pub const OUTLINE_COLOR: &'static str = "#109ea2";
    pub const FILL_OPACITY: f64 = 0.75;
}

/// Options serialized for the JS side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOptions {
    pub center: [f64; 2],
    pub zoom: f64,
    pub tile_url: &'static str,
    pub attribution: &'static str,
    pub outline_color: &'static str,
    pub fill_opacity: f64,
    /// Scroll, double-click and touch zoom plus the zoom control.
    pub interactive: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: MapConfig::CENTER,
            zoom: MapConfig::ZOOM,
            tile_url: MapConfig::TILE_URL,
            attribution: MapConfig::ATTRIBUTION,
            outline_color: MapConfig::OUTLINE_COLOR,
            fill_opacity: MapConfig::FILL_OPACITY,
            interactive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayRow {
    pub label: String,
    pub value: String,
    pub highlight: bool,
}

/// The popup attached to every ring of a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub title: String,
    pub rows: Vec<OverlayRow>,
}

/// One location ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationShape {
    pub location: LocationName,
    pub indicator: f64,
    pub fill_color: String,
    /// Rings as `[lat, lng]` pairs.
    pub rings: Vec<Vec<[f64; 2]>>,
    pub overlay: Overlay,
}

/// Swap a stored `(lng, lat)` pair to `[lat, lng]`.
pub fn to_lat_lng(coordinate: &Coordinate) -> [f64; 2] {
    let (lng, lat) = *coordinate;
    [lat, lng]
}

fn overlay(record: &QualityRecord<'_>) -> Overlay {
    Overlay {
        title: format!("{} - {:.2}", record.location(), record.indicator()),
        rows: record
            .attributes()
            .into_iter()
            .map(|a| OverlayRow {
                label: a.label,
                value: a.value,
                highlight: a.highlight,
            })
            .collect(),
    }
}

/// Build a shape for every active location that has a record in the
/// current view. Locations without one are left out entirely.
pub fn build_map_layer(
    locations: &[Location],
    report: &Report,
    view: &DashboardView,
) -> Vec<LocationShape> {
    let period = view.current_period();
    view.active_locations(locations)
        .into_iter()
        .filter_map(|location| {
            let record = resolve(location.name, report, view.mode(), period)?;
            Some(LocationShape {
                location: location.name,
                indicator: record.indicator(),
                fill_color: record.fill_color().to_string(),
                rings: location
                    .rings()
                    .map(|ring| ring.iter().map(to_lat_lng).collect::<Vec<_>>())
                    .collect(),
                overlay: overlay(&record),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::tests::sample_report;
    use crate::view_mode::ViewMode;

    fn location(name: LocationName) -> Location {
        Location {
            name,
            multi_polygons: vec![
                vec![vec![(22.9, 40.6), (23.0, 40.7), (22.9, 40.6)]],
                vec![vec![(23.1, 40.5), (23.2, 40.5), (23.1, 40.5)]],
            ],
        }
    }

    #[test]
    fn test_axis_swap() {
        assert_eq!(to_lat_lng(&(22.94, 40.64)), [40.64, 22.94]);
    }

    #[test]
    fn test_every_ring_is_drawn_swapped() {
        let locations = vec![location(LocationName::Delta)];
        let layer = build_map_layer(&locations, &sample_report(), &DashboardView::new());

        assert_eq!(layer.len(), 1);
        assert_eq!(layer[0].rings.len(), 2);
        assert_eq!(layer[0].rings[0][1], [40.7, 23.0]);
        assert_eq!(layer[0].fill_color, "rgb(32,194,40)");
    }

    #[test]
    fn test_location_without_record_is_skipped() {
        let locations = vec![location(LocationName::Volvi), location(LocationName::Delta)];
        let layer = build_map_layer(&locations, &sample_report(), &DashboardView::new());
        let names: Vec<LocationName> = layer.iter().map(|s| s.location).collect();
        assert_eq!(names, vec![LocationName::Delta]);
    }

    #[test]
    fn test_overlay_title_and_highlight() {
        let locations = vec![location(LocationName::ThermaikosPort)];
        let layer = build_map_layer(&locations, &sample_report(), &DashboardView::new());
        let overlay = &layer[0].overlay;

        assert_eq!(overlay.title, "Thermaikos Port - 90.00");
        let highlighted: Vec<&OverlayRow> = overlay.rows.iter().filter(|r| r.highlight).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].label, "water quality index");
        assert_eq!(highlighted[0].value, "90");
    }

    #[test]
    fn test_story_mode_uses_current_period() {
        let locations = vec![location(LocationName::Delta)];
        let report = sample_report();
        let mut view = DashboardView::new();
        view.apply_report(&report);
        view.set_mode(ViewMode::Story);

        let layer = build_map_layer(&locations, &report, &view);
        assert_eq!(layer[0].indicator, 1.5);
        assert_eq!(layer[0].overlay.rows.last().unwrap().value, "2021");

        view.playback_mut().tick();
        let layer = build_map_layer(&locations, &report, &view);
        assert_eq!(layer[0].indicator, 3.5);
    }

    #[test]
    fn test_compare_mode_draws_selection_only() {
        let locations = vec![location(LocationName::Delta), location(LocationName::Thermi)];
        let mut view = DashboardView::new();
        view.set_compare_locations([LocationName::Thermi]);
        view.set_mode(ViewMode::Compare);

        let layer = build_map_layer(&locations, &sample_report(), &view);
        assert_eq!(layer.len(), 1);
        assert_eq!(layer[0].location, LocationName::Thermi);
    }

    #[test]
    fn test_options_serialize_for_js() {
        let json = serde_json::to_value(MapOptions::default()).unwrap();
        assert_eq!(json["center"][0], 40.68);
        assert_eq!(json["outline_color"], "#109ea2");
        assert_eq!(json["interactive"], false);
    }
}
