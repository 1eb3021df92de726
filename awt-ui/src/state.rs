//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use awt_core::chat::ChatMessage;
use awt_core::location::Location;
use awt_core::report::Report;
use awt_data::view_mode::DashboardView;
use dioxus::prelude::*;

/// Default "from" value of the date range inputs.
pub const DEFAULT_DATE_FROM: &str = "2020-01-01";
/// Default "to" value of the date range inputs.
pub const DEFAULT_DATE_TO: &str = "2024-12-01";

/// Tags report requests so that only the newest response is applied.
///
/// Each request takes a number from [`RequestGeneration::begin`]; when its
/// response arrives it is only used if no later request has started since.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    /// Start a new request and return its generation.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }
}

/// Errors shown in the filter panel, one slot per source so that a
/// successful report does not hide a failed location fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorBanner {
    locations: Option<String>,
    report: Option<String>,
}

impl ErrorBanner {
    pub fn set_locations_error(&mut self, message: String) {
        self.locations = Some(message);
    }

    /// Record the outcome of the latest report request: `None` on success.
    pub fn set_report_error(&mut self, message: Option<String>) {
        self.report = message;
    }

    /// Messages to show, location errors first.
    pub fn messages(&self) -> Vec<String> {
        self.locations
            .iter()
            .chain(self.report.iter())
            .cloned()
            .collect()
    }

    pub fn dismiss(&mut self) {
        self.locations = None;
        self.report = None;
    }
}

/// Shared state of the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Monitored locations with their geometry
    pub locations: Signal<Vec<Location>>,
    /// Last report received; kept while a newer one is loading or failed
    pub report: Signal<Option<Report>>,
    /// Whether a report request is in flight
    pub loading: Signal<bool>,
    /// Inline errors for the filter panel
    pub errors: Signal<ErrorBanner>,
    /// Raw value of the "from" date input (YYYY-MM-DD)
    pub date_from: Signal<String>,
    /// Raw value of the "to" date input (YYYY-MM-DD)
    pub date_to: Signal<String>,
    /// View mode, compare selection and story position
    pub view: Signal<DashboardView>,
    pub generation: Signal<RequestGeneration>,
    pub chat_messages: Signal<Vec<ChatMessage>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            locations: Signal::new(Vec::new()),
            report: Signal::new(None),
            loading: Signal::new(true),
            errors: Signal::new(ErrorBanner::default()),
            date_from: Signal::new(DEFAULT_DATE_FROM.to_string()),
            date_to: Signal::new(DEFAULT_DATE_TO.to_string()),
            view: Signal::new(DashboardView::new()),
            generation: Signal::new(RequestGeneration::default()),
            chat_messages: Signal::new(ChatMessage::conversation()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_generation_is_current() {
        let mut generation = RequestGeneration::default();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_nothing_is_current_before_first_request() {
        assert!(!RequestGeneration::default().is_current(1));
    }

    #[test]
    fn test_report_success_keeps_locations_error() {
        let mut banner = ErrorBanner::default();
        banner.set_locations_error("Failed to load locations: timeout".to_string());
        banner.set_report_error(None);

        assert_eq!(
            banner.messages(),
            vec!["Failed to load locations: timeout".to_string()]
        );
    }

    #[test]
    fn test_report_error_replaced_by_next_outcome() {
        let mut banner = ErrorBanner::default();
        banner.set_report_error(Some("Invalid date range".to_string()));
        assert_eq!(banner.messages(), vec!["Invalid date range".to_string()]);

        banner.set_report_error(None);
        assert!(banner.messages().is_empty());
    }

    #[test]
    fn test_dismiss_clears_both_sources() {
        let mut banner = ErrorBanner::default();
        banner.set_locations_error("Failed to load locations: 500".to_string());
        banner.set_report_error(Some("Please select a date range".to_string()));
        assert_eq!(banner.messages().len(), 2);

        banner.dismiss();
        assert_eq!(banner, ErrorBanner::default());
    }
}
