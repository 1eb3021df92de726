use crate::quality::{
    AirQuality, AirQualityPeriod, QualityHistory, SeaWaterQuality, SeaWaterQualityPeriod,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the dashboard needs for one date range query.
///
/// A new query replaces the whole report; nothing is merged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Report {
    pub air_quality_story_view: Vec<AirQualityPeriod>,
    pub sea_water_quality_story_view: Vec<SeaWaterQualityPeriod>,
    pub air_quality_data_view: Vec<AirQuality>,
    pub sea_water_quality_data_view: Vec<SeaWaterQuality>,
    pub air_quality_history: QualityHistory,
    pub water_quality_history: QualityHistory,
}

impl Report {
    /// Total number of records across the four views, for logging.
    pub fn record_count(&self) -> usize {
        self.air_quality_story_view.len()
            + self.sea_water_quality_story_view.len()
            + self.air_quality_data_view.len()
            + self.sea_water_quality_data_view.len()
    }
}

/// The date range the server has data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptableDateRange {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl fmt::Display for AcceptableDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Acceptable date range is between {} and {}",
            self.from_date.format("%Y-%m-%d"),
            self.to_date.format("%Y-%m-%d")
        )
    }
}

/// Error body returned when a report is requested outside the available range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInvalidRange {
    #[serde(default)]
    pub error: String,
    pub acceptable_date_range: AcceptableDateRange,
}

/// Result of a report query that reached the server.
///
/// A rejected range is a value, not an error: callers branch on it and show
/// its message instead of a report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Report(Box<Report>),
    Rejected(AcceptableDateRange),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message() {
        let body = r#"{
            "error": "Date range is out of bounds",
            "acceptable_date_range": {"from_date": "2015-01-01", "to_date": "2025-01-01"}
        }"#;
        let invalid: ReportInvalidRange = serde_json::from_str(body).unwrap();
        assert_eq!(
            invalid.acceptable_date_range.to_string(),
            "Acceptable date range is between 2015-01-01 and 2025-01-01"
        );
    }

    #[test]
    fn test_empty_report_deserializes() {
        let body = r#"{
            "air_quality_story_view": [],
            "sea_water_quality_story_view": [],
            "air_quality_data_view": [],
            "sea_water_quality_data_view": [],
            "air_quality_history": {"labels": [], "lines": []},
            "water_quality_history": {"labels": [], "lines": []}
        }"#;
        let report: Report = serde_json::from_str(body).unwrap();
        assert_eq!(report.record_count(), 0);
    }
}
