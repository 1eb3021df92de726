//! Derivation engine for the air and sea water quality dashboard.
//!
//! Everything here is pure: given the locations and a [`Report`], it works
//! out which record applies to each location, which colour it gets, what the
//! story timeline looks like, and what the comparison table contains.
//!
//! [`Report`]: awt_core::report::Report

pub mod color;
pub mod comparison;
pub mod fields;
pub mod history;
pub mod map;
pub mod resolver;
pub mod story;
pub mod view_mode;

/// Attribute labels, cell formatting and the chart palette.
pub mod shaping {
    /// Pastel colours assigned to chart lines in order.
    pub const CHART_PALETTE: [&str; 14] = [
        "#A1D6E2", // blue
        "#FBB4AE", // pink
        "#B3DE69", // lime
        "#FDB462", // orange
        "#CAB2D6", // purple
        "#FFCCBC", // peach
        "#CCEBC5", // mint
        "#FFFFB3", // yellow
        "#8DD3C7", // teal
        "#FCCDE5", // lavender
        "#D9D9D9", // gray
        "#BC80BD", // deeper purple
        "#FFED6F", // yellow-gold
        "#C5E384", // green
    ];

    /// Palette colour for the `index`th series, wrapping around.
    pub fn palette_color(index: usize) -> &'static str {
        CHART_PALETTE[index % CHART_PALETTE.len()]
    }

    /// Turn a wire attribute name into a label: drop a leading `avg_` and
    /// replace underscores with spaces. Case is left alone.
    pub fn humanize_attribute(attribute: &str) -> String {
        attribute
            .strip_prefix("avg_")
            .unwrap_or(attribute)
            .replace('_', " ")
    }

    /// A value read out of a quality record.
    #[derive(Debug, Clone, PartialEq)]
    pub enum CellValue {
        Missing,
        Text(String),
        Number(f64),
    }

    impl From<Option<f64>> for CellValue {
        fn from(value: Option<f64>) -> Self {
            value.map_or(CellValue::Missing, CellValue::Number)
        }
    }

    impl From<f64> for CellValue {
        fn from(value: f64) -> Self {
            CellValue::Number(value)
        }
    }

    /// Format a cell for display.
    ///
    /// Missing values, empty strings, `0` and NaN all show as "N/A", so a real
    /// zero reading cannot be told apart from no data. Integral numbers print
    /// without decimals, everything else with two.
    pub fn format_cell_value(value: &CellValue) -> String {
        match value {
            CellValue::Missing => "N/A".to_string(),
            CellValue::Text(text) if text.is_empty() => "N/A".to_string(),
            CellValue::Text(text) => text.clone(),
            CellValue::Number(n) if *n == 0.0 || n.is_nan() => "N/A".to_string(),
            CellValue::Number(n) if n.is_infinite() => {
                format!("{}Infinity", if *n < 0.0 { "-" } else { "" })
            }
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", n),
            CellValue::Number(n) => format!("{:.2}", n),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_humanize_strips_avg_prefix() {
            assert_eq!(humanize_attribute("avg_dissolved_oxygen"), "dissolved oxygen");
            assert_eq!(humanize_attribute("co2_level"), "co2 level");
            assert_eq!(humanize_attribute("location"), "location");
            assert_eq!(humanize_attribute("Avg_Lead"), "Avg Lead");
        }

        #[test]
        fn test_format_numbers() {
            assert_eq!(format_cell_value(&CellValue::Number(3.0)), "3");
            assert_eq!(format_cell_value(&CellValue::Number(3.14159)), "3.14");
            assert_eq!(format_cell_value(&CellValue::Number(-2.5)), "-2.50");
            assert_eq!(format_cell_value(&CellValue::Number(1250.0)), "1250");
        }

        #[test]
        fn test_format_text_passes_through() {
            assert_eq!(format_cell_value(&CellValue::Text("x".to_string())), "x");
        }

        #[test]
        fn test_zero_and_missing_both_show_na() {
            assert_eq!(format_cell_value(&CellValue::Number(0.0)), "N/A");
            assert_eq!(format_cell_value(&CellValue::Missing), "N/A");
            assert_eq!(format_cell_value(&CellValue::Text(String::new())), "N/A");
            assert_eq!(format_cell_value(&CellValue::Number(f64::NAN)), "N/A");
            assert_eq!(format_cell_value(&None::<f64>.into()), "N/A");
        }

        #[test]
        fn test_palette_wraps() {
            assert_eq!(palette_color(0), "#A1D6E2");
            assert_eq!(palette_color(14), palette_color(0));
            assert_eq!(palette_color(15), "#FBB4AE");
        }
    }
}
