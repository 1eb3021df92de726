//! Side by side air quality table for compare mode.

use crate::fields::air_fields;
use crate::shaping::format_cell_value;
use awt_core::location::LocationName;
use awt_core::report::Report;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub location: LocationName,
    pub cells: Vec<String>,
}

/// Columns come from the air quality schema; one row per compared location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Build the table for `locations`, in the given order, from the air
    /// quality snapshot. A location with no record gets "N/A" in every cell.
    pub fn build(report: &Report, locations: &[LocationName]) -> Self {
        let fields = air_fields();
        let columns = fields.iter().map(|f| f.label()).collect();
        let rows = locations
            .iter()
            .map(|&location| {
                let record = report
                    .air_quality_data_view
                    .iter()
                    .find(|r| r.location == location);
                let cells = fields
                    .iter()
                    .map(|field| match record {
                        Some(record) => format_cell_value(&field.read(record)),
                        None => "N/A".to_string(),
                    })
                    .collect();
                ComparisonRow { location, cells }
            })
            .collect();
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
