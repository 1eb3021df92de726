//! Ordered field descriptors for each quality record schema.
//!
//! Overlays and the comparison table walk these lists instead of reflecting
//! over record keys, so column order is fixed here.

use crate::shaping::{humanize_attribute, CellValue};
use awt_core::quality::{AirQuality, SeaWaterQuality};

/// One column of a record schema.
pub struct FieldDescriptor<R> {
    /// Attribute name as it appears on the wire.
    pub name: &'static str,
    pub value: fn(&R) -> CellValue,
    /// True for the index that drives the map colour.
    pub is_index: bool,
}

impl<R> FieldDescriptor<R> {
    fn plain(name: &'static str, value: fn(&R) -> CellValue) -> Self {
        Self {
            name,
            value,
            is_index: false,
        }
    }

    fn index(name: &'static str, value: fn(&R) -> CellValue) -> Self {
        Self {
            name,
            value,
            is_index: true,
        }
    }

    pub fn label(&self) -> String {
        humanize_attribute(self.name)
    }

    pub fn read(&self, record: &R) -> CellValue {
        (self.value)(record)
    }
}

pub fn air_fields() -> Vec<FieldDescriptor<AirQuality>> {
    type Field = FieldDescriptor<AirQuality>;
    vec![
        Field::plain("location", |r| CellValue::Text(r.location.to_string())),
        Field::plain("avg_co", |r| r.avg_co.into()),
        Field::plain("avg_no", |r| r.avg_no.into()),
        Field::plain("avg_no2", |r| r.avg_no2.into()),
        Field::plain("avg_so2", |r| r.avg_so2.into()),
        Field::plain("avg_o3", |r| r.avg_o3.into()),
        Field::index("avg_air_quality_index", |r| {
            CellValue::Number(r.avg_air_quality_index)
        }),
    ]
}

pub fn sea_fields() -> Vec<FieldDescriptor<SeaWaterQuality>> {
    type Field = FieldDescriptor<SeaWaterQuality>;
    vec![
        Field::plain("location", |r| CellValue::Text(r.location.to_string())),
        Field::plain("avg_temperature", |r| r.avg_temperature.into()),
        Field::plain("avg_dissolved_oxygen", |r| r.avg_dissolved_oxygen.into()),
        Field::plain("avg_dissolved_oxygen_percentage", |r| {
            r.avg_dissolved_oxygen_percentage.into()
        }),
        Field::plain("avg_arsenic", |r| r.avg_arsenic.into()),
        Field::plain("avg_lead", |r| r.avg_lead.into()),
        Field::plain("avg_cadmium", |r| r.avg_cadmium.into()),
        Field::plain("avg_nickel", |r| r.avg_nickel.into()),
        Field::plain("avg_copper", |r| r.avg_copper.into()),
        Field::index("avg_water_quality_index", |r| {
            CellValue::Number(r.avg_water_quality_index)
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use awt_core::location::LocationName;

    #[test]
    fn test_air_columns_in_schema_order() {
        let labels: Vec<String> = air_fields().iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["location", "co", "no", "no2", "so2", "o3", "air quality index"]
        );
    }

    #[test]
    fn test_exactly_one_index_per_schema() {
        assert_eq!(air_fields().iter().filter(|f| f.is_index).count(), 1);
        assert_eq!(sea_fields().iter().filter(|f| f.is_index).count(), 1);
    }

    #[test]
    fn test_read_sea_field() {
        let record = SeaWaterQuality {
            location: LocationName::ThermaikosPort,
            avg_temperature: Some(19.5),
            avg_dissolved_oxygen: None,
            avg_dissolved_oxygen_percentage: None,
            avg_arsenic: None,
            avg_lead: None,
            avg_cadmium: None,
            avg_nickel: None,
            avg_copper: None,
            avg_water_quality_index: 74.0,
        };
        let fields = sea_fields();
        assert_eq!(fields[1].read(&record), CellValue::Number(19.5));
        assert_eq!(fields[2].read(&record), CellValue::Missing);
        assert_eq!(
            fields[0].read(&record),
            CellValue::Text("Thermaikos Port".to_string())
        );
    }
}
