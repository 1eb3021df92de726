//! Story mode timeline and playback position.
//!
//! The timeline is every distinct period found in the two story views,
//! sorted as strings. Playback advances one step per timer tick and wraps;
//! the manual previous/next buttons clamp at the ends and pause the automatic
//! advance until story mode is entered again.

use awt_core::report::Report;
use std::collections::BTreeSet;

/// Delay between automatic story steps.
pub const STORY_STEP_INTERVAL_MS: u32 = 2_000;

/// Distinct periods across the air and sea water story views, sorted.
pub fn story_steps(report: &Report) -> Vec<String> {
    report
        .air_quality_story_view
        .iter()
        .map(|r| r.period.as_str())
        .chain(
            report
                .sea_water_quality_story_view
                .iter()
                .map(|r| r.period.as_str()),
        )
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Position within the story timeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoryPlayback {
    steps: Vec<String>,
    current: usize,
    paused: bool,
}

impl StoryPlayback {
    pub fn new(steps: Vec<String>) -> Self {
        Self {
            steps,
            current: 0,
            paused: false,
        }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn current_period(&self) -> Option<&str> {
        self.steps.get(self.current).map(String::as_str)
    }

    /// True once the user has navigated by hand.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Replace the timeline, keeping the position where it still exists and
    /// clamping to the last step otherwise.
    pub fn set_steps(&mut self, steps: Vec<String>) {
        self.current = self.current.min(steps.len().saturating_sub(1));
        self.steps = steps;
    }

    /// Timer callback: advance one step, wrapping at the end. Does nothing
    /// while paused or when there are no steps. Returns whether it moved.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.steps.is_empty() {
            return false;
        }
        self.current = (self.current + 1) % self.steps.len();
        true
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.steps.len()
    }

    /// Manual step back. Pauses automatic playback.
    pub fn step_back(&mut self) {
        if self.can_go_previous() {
            self.current -= 1;
        }
        self.paused = true;
    }

    /// Manual step forward. Pauses automatic playback.
    pub fn step_forward(&mut self) {
        if self.can_go_next() {
            self.current += 1;
        }
        self.paused = true;
    }

    /// Jump to `period`. Returns false, leaving the position alone, if the
    /// timeline has no such period.
    pub fn seek(&mut self, period: &str) -> bool {
        match self.steps.iter().position(|p| p == period) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    /// Clear the manual pause.
    pub fn resume(&mut self) {
        self.paused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awt_core::location::LocationName;
    use awt_core::quality::{AirQuality, AirQualityPeriod, SeaWaterQuality, SeaWaterQualityPeriod};

    fn air(period: &str) -> AirQualityPeriod {
        AirQualityPeriod {
            quality: AirQuality {
                location: LocationName::Kalamaria,
                avg_co: None,
                avg_no: None,
                avg_no2: None,
                avg_so2: None,
                avg_o3: None,
                avg_air_quality_index: 2.0,
            },
            period: period.to_string(),
        }
    }

    fn sea(period: &str) -> SeaWaterQualityPeriod {
        SeaWaterQualityPeriod {
            quality: SeaWaterQuality {
                location: LocationName::ThermaikosPort,
                avg_temperature: None,
                avg_dissolved_oxygen: None,
                avg_dissolved_oxygen_percentage: None,
                avg_arsenic: None,
                avg_lead: None,
                avg_cadmium: None,
                avg_nickel: None,
                avg_copper: None,
                avg_water_quality_index: 70.0,
            },
            period: period.to_string(),
        }
    }

    fn steps(periods: &[&str]) -> Vec<String> {
        periods.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_steps_are_deduplicated_and_sorted() {
        let report = Report {
            air_quality_story_view: vec![air("2021-01"), air("2021-02"), air("2021-01")],
            sea_water_quality_story_view: vec![sea("2021-03")],
            ..Default::default()
        };
        assert_eq!(story_steps(&report), steps(&["2021-01", "2021-02", "2021-03"]));
    }

    #[test]
    fn test_empty_report_has_no_steps() {
        assert!(story_steps(&Report::default()).is_empty());
    }

    #[test]
    fn test_tick_wraps() {
        let mut playback = StoryPlayback::new(steps(&["a", "b", "c"]));
        assert!(playback.tick());
        assert!(playback.tick());
        assert_eq!(playback.current_period(), Some("c"));
        assert!(playback.tick());
        assert_eq!(playback.current_step(), 0);
    }

    #[test]
    fn test_tick_without_steps_is_noop() {
        let mut playback = StoryPlayback::default();
        assert!(!playback.tick());
        assert_eq!(playback.current_period(), None);
    }

    #[test]
    fn test_manual_navigation_clamps_and_pauses() {
        let mut playback = StoryPlayback::new(steps(&["a", "b"]));
        assert!(!playback.can_go_previous());
        playback.step_back();
        assert_eq!(playback.current_step(), 0);
        assert!(playback.is_paused());

        playback.step_forward();
        playback.step_forward();
        assert_eq!(playback.current_step(), 1);
        assert!(!playback.can_go_next());

        assert!(!playback.tick());
        assert_eq!(playback.current_step(), 1);

        playback.resume();
        assert!(playback.tick());
        assert_eq!(playback.current_step(), 0);
    }

    #[test]
    fn test_shrinking_steps_clamps_position() {
        let mut playback = StoryPlayback::new(steps(&["a", "b", "c", "d"]));
        playback.tick();
        playback.tick();
        playback.tick();
        playback.set_steps(steps(&["x", "y"]));
        assert_eq!(playback.current_period(), Some("y"));

        playback.set_steps(Vec::new());
        assert_eq!(playback.current_step(), 0);
        assert_eq!(playback.current_period(), None);
    }

    #[test]
    fn test_seek_to_known_period() {
        let mut playback = StoryPlayback::new(steps(&["2021", "2022", "2023"]));
        assert!(playback.seek("2023"));
        assert_eq!(playback.current_step(), 2);
        assert!(!playback.seek("1999"));
        assert_eq!(playback.current_step(), 2);
        assert!(!playback.is_paused());
    }

    #[test]
    fn test_growing_steps_keeps_position() {
        let mut playback = StoryPlayback::new(steps(&["a", "b"]));
        playback.tick();
        playback.set_steps(steps(&["a", "b", "c"]));
        assert_eq!(playback.current_step(), 1);
    }
}
