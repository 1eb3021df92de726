//! Data / story / compare view selection.

use crate::story::{story_steps, StoryPlayback};
use awt_core::location::{Location, LocationName};
use awt_core::report::Report;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Which dataset and rendering path the map uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Latest aggregate snapshot for every location.
    #[default]
    Data,
    /// Period by period playback of the story views.
    Story,
    /// Snapshot restricted to user-picked locations, plus a table.
    Compare,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Data, ViewMode::Story, ViewMode::Compare];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Data => "data_mode",
            ViewMode::Story => "story_mode",
            ViewMode::Compare => "compare_mode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Data => "Data Mode",
            ViewMode::Story => "Story Mode",
            ViewMode::Compare => "Compare Mode",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "data" | "data_mode" => Ok(ViewMode::Data),
            "story" | "story_mode" => Ok(ViewMode::Story),
            "compare" | "compare_mode" => Ok(ViewMode::Compare),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}

/// Locations offered in the compare picker: every air quality site.
pub fn compare_options(locations: &[Location]) -> Vec<LocationName> {
    locations
        .iter()
        .map(|l| l.name)
        .filter(|name| !name.is_sea_water_site())
        .collect()
}

/// The dashboard's view state: current mode, compare selection and story
/// playback position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    mode: ViewMode,
    compare_locations: Vec<LocationName>,
    playback: StoryPlayback,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch modes. Entering or leaving story mode clears the manual pause,
    /// so coming back to the story auto-plays again.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }
        debug!("View mode {} -> {}", self.mode, mode);
        if mode == ViewMode::Story || self.mode == ViewMode::Story {
            self.playback.resume();
        }
        self.mode = mode;
    }

    pub fn compare_locations(&self) -> &[LocationName] {
        &self.compare_locations
    }

    /// Replace the compare selection. Order is kept, duplicates and the sea
    /// water site are dropped.
    pub fn set_compare_locations(&mut self, names: impl IntoIterator<Item = LocationName>) {
        self.compare_locations.clear();
        for name in names {
            if !name.is_sea_water_site() && !self.compare_locations.contains(&name) {
                self.compare_locations.push(name);
            }
        }
    }

    /// Add a location to the comparison, or remove it if already there.
    pub fn toggle_compare_location(&mut self, name: LocationName) {
        if let Some(pos) = self.compare_locations.iter().position(|n| *n == name) {
            self.compare_locations.remove(pos);
        } else if !name.is_sea_water_site() {
            self.compare_locations.push(name);
        }
    }

    pub fn playback(&self) -> &StoryPlayback {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut StoryPlayback {
        &mut self.playback
    }

    /// Rebuild the story timeline from a freshly received report.
    pub fn apply_report(&mut self, report: &Report) {
        self.playback.set_steps(story_steps(report));
    }

    /// The period to resolve records against; only set in story mode.
    pub fn current_period(&self) -> Option<&str> {
        match self.mode {
            ViewMode::Story => self.playback.current_period(),
            _ => None,
        }
    }

    /// Whether the story timer should be running. A single period has
    /// nothing to advance to.
    pub fn wants_story_timer(&self) -> bool {
        self.mode == ViewMode::Story && self.playback.steps().len() > 1
    }

    /// Locations to draw: the compare selection in compare mode (in selection
    /// order), otherwise every location.
    pub fn active_locations<'a>(&self, locations: &'a [Location]) -> Vec<&'a Location> {
        match self.mode {
            ViewMode::Compare => self
                .compare_locations
                .iter()
                .filter_map(|name| locations.iter().find(|l| l.name == *name))
                .collect(),
            _ => locations.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: LocationName) -> Location {
        Location {
            name,
            multi_polygons: Vec::new(),
        }
    }

    #[test]
    fn test_default_is_data_mode() {
        assert_eq!(DashboardView::new().mode(), ViewMode::Data);
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("story_mode".parse::<ViewMode>().unwrap(), ViewMode::Story);
        assert_eq!("compare".parse::<ViewMode>().unwrap(), ViewMode::Compare);
        assert!("timelapse".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_leaving_story_clears_pause() {
        let mut view = DashboardView::new();
        view.playback_mut()
            .set_steps(vec!["2021".to_string(), "2022".to_string()]);
        view.set_mode(ViewMode::Story);
        view.playback_mut().step_forward();
        assert!(view.playback().is_paused());

        view.set_mode(ViewMode::Data);
        assert!(!view.playback().is_paused());
        assert!(!view.wants_story_timer());

        view.set_mode(ViewMode::Story);
        assert!(view.wants_story_timer());
    }

    #[test]
    fn test_no_story_timer_for_single_period() {
        let mut view = DashboardView::new();
        view.set_mode(ViewMode::Story);
        assert!(!view.wants_story_timer());

        view.playback_mut().set_steps(vec!["2021".to_string()]);
        assert!(!view.wants_story_timer());

        view.playback_mut()
            .set_steps(vec!["2021".to_string(), "2022".to_string()]);
        assert!(view.wants_story_timer());
    }

    #[test]
    fn test_current_period_only_in_story_mode() {
        let mut view = DashboardView::new();
        view.playback_mut().set_steps(vec!["2021".to_string()]);
        assert_eq!(view.current_period(), None);
        view.set_mode(ViewMode::Story);
        assert_eq!(view.current_period(), Some("2021"));
    }

    #[test]
    fn test_compare_selection_excludes_port_and_duplicates() {
        let mut view = DashboardView::new();
        view.set_compare_locations([
            LocationName::Delta,
            LocationName::ThermaikosPort,
            LocationName::Delta,
            LocationName::Thermi,
        ]);
        assert_eq!(
            view.compare_locations(),
            &[LocationName::Delta, LocationName::Thermi]
        );

        view.toggle_compare_location(LocationName::Delta);
        view.toggle_compare_location(LocationName::ThermaikosPort);
        assert_eq!(view.compare_locations(), &[LocationName::Thermi]);
    }

    #[test]
    fn test_active_locations_follow_mode() {
        let locations = vec![
            location(LocationName::Delta),
            location(LocationName::Thermi),
            location(LocationName::ThermaikosPort),
        ];
        let mut view = DashboardView::new();
        view.set_compare_locations([LocationName::Thermi]);
        assert_eq!(view.active_locations(&locations).len(), 3);

        view.set_mode(ViewMode::Compare);
        let active: Vec<LocationName> = view
            .active_locations(&locations)
            .iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(active, vec![LocationName::Thermi]);
    }

    #[test]
    fn test_compare_options_skip_sea_site() {
        let locations = vec![
            location(LocationName::Delta),
            location(LocationName::ThermaikosPort),
        ];
        assert_eq!(compare_options(&locations), vec![LocationName::Delta]);
    }
}
