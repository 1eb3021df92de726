//! Pick the quality record that drives a location's colour.

use crate::color::{air_band_color, sea_water_color, Rgb};
use crate::fields::{air_fields, sea_fields, FieldDescriptor};
use crate::shaping::{format_cell_value, humanize_attribute};
use crate::view_mode::ViewMode;
use awt_core::location::LocationName;
use awt_core::quality::{AirQuality, SeaWaterQuality};
use awt_core::report::Report;
use serde::Serialize;

/// The record resolved for one location, tagged by schema.
///
/// Story mode records carry their period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QualityRecord<'a> {
    Air {
        record: &'a AirQuality,
        period: Option<&'a str>,
    },
    Sea {
        record: &'a SeaWaterQuality,
        period: Option<&'a str>,
    },
}

/// One labelled, formatted attribute of a resolved record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub label: String,
    pub value: String,
    /// Set on the index row, which overlays highlight.
    pub highlight: bool,
}

impl<'a> QualityRecord<'a> {
    pub fn location(&self) -> LocationName {
        match self {
            QualityRecord::Air { record, .. } => record.location,
            QualityRecord::Sea { record, .. } => record.location,
        }
    }

    pub fn period(&self) -> Option<&'a str> {
        match self {
            QualityRecord::Air { period, .. } | QualityRecord::Sea { period, .. } => *period,
        }
    }

    /// The single scalar the map colour is computed from.
    pub fn indicator(&self) -> f64 {
        match self {
            QualityRecord::Air { record, .. } => record.avg_air_quality_index,
            QualityRecord::Sea { record, .. } => record.avg_water_quality_index,
        }
    }

    /// Banded colour for air, inverted continuous ramp for sea water.
    pub fn fill_color(&self) -> Rgb {
        match self {
            QualityRecord::Air { record, .. } => air_band_color(record.avg_air_quality_index),
            QualityRecord::Sea { record, .. } => sea_water_color(record.avg_water_quality_index),
        }
    }

    /// Every attribute in schema order, followed by the period in story mode.
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attributes = match self {
            QualityRecord::Air { record, .. } => describe(&air_fields(), record),
            QualityRecord::Sea { record, .. } => describe(&sea_fields(), record),
        };
        if let Some(period) = self.period() {
            attributes.push(Attribute {
                label: humanize_attribute("period"),
                value: period.to_string(),
                highlight: false,
            });
        }
        attributes
    }
}

fn describe<R>(fields: &[FieldDescriptor<R>], record: &R) -> Vec<Attribute> {
    fields
        .iter()
        .map(|field| Attribute {
            label: field.label(),
            value: format_cell_value(&field.read(record)),
            highlight: field.is_index,
        })
        .collect()
}

/// Find the record for `location` in the view selected by `mode`.
///
/// Story mode looks in the story views for the record of `current_period`;
/// data and compare modes use the snapshot views. The port reads the sea
/// water collections, every other location the air ones. `None` means there
/// is nothing to draw for the location.
pub fn resolve<'a>(
    location: LocationName,
    report: &'a Report,
    mode: ViewMode,
    current_period: Option<&str>,
) -> Option<QualityRecord<'a>> {
    let sea = location.is_sea_water_site();
    match mode {
        ViewMode::Story => {
            let period = current_period?;
            if sea {
                report
                    .sea_water_quality_story_view
                    .iter()
                    .find(|r| r.quality.location == location && r.period == period)
                    .map(|r| QualityRecord::Sea {
                        record: &r.quality,
                        period: Some(r.period.as_str()),
                    })
            } else {
                report
                    .air_quality_story_view
                    .iter()
                    .find(|r| r.quality.location == location && r.period == period)
                    .map(|r| QualityRecord::Air {
                        record: &r.quality,
                        period: Some(r.period.as_str()),
                    })
            }
        }
        ViewMode::Data | ViewMode::Compare => {
            if sea {
                report
                    .sea_water_quality_data_view
                    .iter()
                    .find(|r| r.location == location)
                    .map(|record| QualityRecord::Sea {
                        record,
                        period: None,
                    })
            } else {
                report
                    .air_quality_data_view
                    .iter()
                    .find(|r| r.location == location)
                    .map(|record| QualityRecord::Air {
                        record,
                        period: None,
                    })
            }
        }
    }
}
