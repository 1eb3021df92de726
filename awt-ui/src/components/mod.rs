//! Reusable Dioxus RSX components for the dashboard.

mod chat_widget;
mod compare_selector;
mod comparison_table;
mod date_range_picker;
mod error_display;
mod history_chart;
mod loading_spinner;
mod location_map;
mod map_legend;
mod report_filters;
mod story_stepper;
mod view_mode_selector;

pub use chat_widget::ChatWidget;
pub use compare_selector::CompareSelector;
pub use comparison_table::ComparisonTable;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use history_chart::{HistoryChart, HistoryKind};
pub use loading_spinner::LoadingSpinner;
pub use location_map::{LocationMap, MAP_CONTAINER_ID};
pub use map_legend::MapLegend;
pub use report_filters::ReportFilters;
pub use story_stepper::StoryStepper;
pub use view_mode_selector::ViewModeSelector;
