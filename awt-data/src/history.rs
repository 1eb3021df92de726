//! Trend chart series built from the report's history blocks.

use crate::shaping::palette_color;
use awt_core::location::LocationName;
use awt_core::quality::QualityHistory;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum HistoryError {
    #[error("History line for {location} has {values} values for {labels} labels")]
    LengthMismatch {
        location: LocationName,
        values: usize,
        labels: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLine {
    pub label: String,
    pub color: &'static str,
    /// `None` leaves a gap in the line.
    pub values: Vec<Option<f64>>,
}

/// Input for the D3 multi-line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub lines: Vec<ChartLine>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.lines.is_empty()
    }
}

/// Turn a history block into chart lines, one colour per line in order.
pub fn chart_series(title: &str, history: &QualityHistory) -> Result<ChartSeries, HistoryError> {
    let labels = history.labels.len();
    let lines = history
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if line.values.len() != labels {
                return Err(HistoryError::LengthMismatch {
                    location: line.location,
                    values: line.values.len(),
                    labels,
                });
            }
            Ok(ChartLine {
                label: line.location.to_string(),
                color: palette_color(i),
                values: line.values.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChartSeries {
        title: title.to_string(),
        labels: history.labels.clone(),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use awt_core::quality::HistoryLine;

    fn history(values: Vec<Vec<Option<f64>>>) -> QualityHistory {
        QualityHistory {
            labels: vec!["2021-01".to_string(), "2021-02".to_string()],
            lines: values
                .into_iter()
                .zip([LocationName::Delta, LocationName::Kalamaria])
                .map(|(values, location)| HistoryLine { location, values })
                .collect(),
        }
    }

    #[test]
    fn test_lines_get_palette_colors_in_order() {
        let series = chart_series(
            "Air quality index",
            &history(vec![vec![Some(1.0), None], vec![Some(2.0), Some(3.0)]]),
        )
        .unwrap();
        assert_eq!(series.lines[0].label, "Delta Municipality");
        assert_eq!(series.lines[0].color, palette_color(0));
        assert_eq!(series.lines[1].color, palette_color(1));
        assert_eq!(series.lines[0].values, vec![Some(1.0), None]);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let err = chart_series("x", &history(vec![vec![Some(1.0)]])).unwrap_err();
        assert_eq!(
            err,
            HistoryError::LengthMismatch {
                location: LocationName::Delta,
                values: 1,
                labels: 2,
            }
        );
    }

    #[test]
    fn test_empty_history_is_empty_series() {
        let series = chart_series("x", &QualityHistory::default()).unwrap();
        assert!(series.is_empty());
    }
}
