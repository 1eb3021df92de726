use crate::location::LocationName;
use serde::{Deserialize, Serialize};

/// Averaged air pollutant readings for one municipality.
///
/// Concentrations are in µg/m³. The air quality index follows the European
/// banding (1 = good .. 6 = extremely poor) and may carry fractional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    pub location: LocationName,
    #[serde(default)]
    pub avg_co: Option<f64>,
    /// Not every station measures NO.
    #[serde(default)]
    pub avg_no: Option<f64>,
    #[serde(default)]
    pub avg_no2: Option<f64>,
    #[serde(default)]
    pub avg_so2: Option<f64>,
    #[serde(default)]
    pub avg_o3: Option<f64>,
    pub avg_air_quality_index: f64,
}

/// Averaged sea water readings for the port.
///
/// The water quality index ranges from 0 (worst) to 100 (best).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeaWaterQuality {
    pub location: LocationName,
    #[serde(default)]
    pub avg_temperature: Option<f64>,
    #[serde(default)]
    pub avg_dissolved_oxygen: Option<f64>,
    #[serde(default)]
    pub avg_dissolved_oxygen_percentage: Option<f64>,
    #[serde(default)]
    pub avg_arsenic: Option<f64>,
    #[serde(default)]
    pub avg_lead: Option<f64>,
    #[serde(default)]
    pub avg_cadmium: Option<f64>,
    #[serde(default)]
    pub avg_nickel: Option<f64>,
    #[serde(default)]
    pub avg_copper: Option<f64>,
    pub avg_water_quality_index: f64,
}

/// Air quality for one period of the story timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityPeriod {
    #[serde(flatten)]
    pub quality: AirQuality,
    /// Period label, e.g. "2021" or "2021-03".
    pub period: String,
}

/// Sea water quality for one period of the story timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeaWaterQualityPeriod {
    #[serde(flatten)]
    pub quality: SeaWaterQuality,
    pub period: String,
}

/// One line of a history chart: a location and one value per label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLine {
    pub location: LocationName,
    /// Missing months are `null`.
    pub values: Vec<Option<f64>>,
}

/// A labelled multi-line time series. Every line has exactly one value per label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QualityHistory {
    pub labels: Vec<String>,
    pub lines: Vec<HistoryLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_quality_with_null_no() {
        let json = r#"{
            "location": "Municipality of Thessaloniki",
            "avg_co": 412.5,
            "avg_no": null,
            "avg_no2": 31.2,
            "avg_so2": 4.1,
            "avg_o3": 55.0,
            "avg_air_quality_index": 2.4
        }"#;
        let air: AirQuality = serde_json::from_str(json).unwrap();
        assert_eq!(air.location, LocationName::Thessaloniki);
        assert_eq!(air.avg_no, None);
        assert_eq!(air.avg_co, Some(412.5));
    }

    #[test]
    fn test_story_period_flattens_record() {
        let json = r#"{
            "location": "Thermaikos Port",
            "avg_temperature": 18.2,
            "avg_dissolved_oxygen": 7.1,
            "avg_dissolved_oxygen_percentage": 92.0,
            "avg_arsenic": 1.2,
            "avg_lead": 0.3,
            "avg_cadmium": 0.01,
            "avg_nickel": 0.8,
            "avg_copper": 0.5,
            "avg_water_quality_index": 81.5,
            "period": "2021-03"
        }"#;
        let sea: SeaWaterQualityPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(sea.period, "2021-03");
        assert_eq!(sea.quality.avg_water_quality_index, 81.5);
        assert_eq!(sea.quality.location, LocationName::ThermaikosPort);
    }

    #[test]
    fn test_history_keeps_null_gaps() {
        let json = r#"{
            "labels": ["2021-01", "2021-02", "2021-03"],
            "lines": [{"location": "Delta Municipality", "values": [2.0, null, 3.5]}]
        }"#;
        let history: QualityHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.lines[0].values, vec![Some(2.0), None, Some(3.5)]);
    }
}
