//! D3 trend chart for one history block of the report.

use crate::js_bridge;
use crate::state::AppState;
use awt_core::report::Report;
use awt_data::history::chart_series;
use dioxus::prelude::*;
use log::warn;

/// Which history block to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Air,
    Water,
}

impl HistoryKind {
    fn title(&self) -> &'static str {
        match self {
            HistoryKind::Air => "Air Quality Index",
            HistoryKind::Water => "Sea Water Quality Index",
        }
    }

    fn container_id(&self) -> &'static str {
        match self {
            HistoryKind::Air => "awt-air-history-chart",
            HistoryKind::Water => "awt-water-history-chart",
        }
    }
}

fn render(kind: HistoryKind, report: &Report) {
    let history = match kind {
        HistoryKind::Air => &report.air_quality_history,
        HistoryKind::Water => &report.water_quality_history,
    };
    let id = kind.container_id();
    let series = match chart_series(kind.title(), history) {
        Ok(series) if !series.is_empty() => series,
        Ok(_) => {
            js_bridge::clear_container(id);
            return;
        }
        Err(e) => {
            warn!("Skipping {} chart: {}", kind.title(), e);
            js_bridge::clear_container(id);
            return;
        }
    };
    match serde_json::to_string(&series) {
        Ok(json) => js_bridge::render_history_chart(id, &json),
        Err(e) => warn!("Could not serialize {} chart: {}", kind.title(), e),
    }
}

#[component]
pub fn HistoryChart(kind: HistoryKind) -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        if let Some(report) = state.report.read().as_ref() {
            render(kind, report);
        }
    });

    rsx! {
        div {
            style: "min-height: 380px; width: 100%; margin-top: 16px;",
            div { id: kind.container_id(), style: "width: 100%;" }
        }
    }
}
