use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `(longitude, latitude)` pair as served by the API.
pub type Coordinate = (f64, f64);

/// One closed ring of coordinates.
pub type Ring = Vec<Coordinate>;

/// Municipalities and the port monitored around Thessaloniki.
///
/// The serialized form is the display name used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationName {
    #[serde(rename = "Ampelokipi - Menemeni Municipality")]
    AmpelokipiMenemeni,
    #[serde(rename = "Chalkidona Municipality")]
    Chalkidona,
    #[serde(rename = "Delta Municipality")]
    Delta,
    #[serde(rename = "Kalamaria Municipality")]
    Kalamaria,
    #[serde(rename = "Kordelio - Evosmos Municipality")]
    KordelioEvosmos,
    #[serde(rename = "Municipality of Lagadas")]
    Lagadas,
    #[serde(rename = "Municipality of Neapoli-Sykies")]
    NeapoliSykies,
    #[serde(rename = "Oreokastro Municipality")]
    Oraiokastro,
    #[serde(rename = "Pavlos Melas Municipality")]
    PavlosMelas,
    #[serde(rename = "Municipality of Pylaia - Chortiatis")]
    PylaiaChortiatis,
    #[serde(rename = "Thermaikos Municipality")]
    Thermaikos,
    #[serde(rename = "Thermi Municipality")]
    Thermi,
    #[serde(rename = "Municipality of Thessaloniki")]
    Thessaloniki,
    #[serde(rename = "Volvi Municipality")]
    Volvi,
    #[serde(rename = "Thermaikos Port")]
    ThermaikosPort,
}

impl LocationName {
    pub const ALL: [LocationName; 15] = [
        LocationName::AmpelokipiMenemeni,
        LocationName::Chalkidona,
        LocationName::Delta,
        LocationName::Kalamaria,
        LocationName::KordelioEvosmos,
        LocationName::Lagadas,
        LocationName::NeapoliSykies,
        LocationName::Oraiokastro,
        LocationName::PavlosMelas,
        LocationName::PylaiaChortiatis,
        LocationName::Thermaikos,
        LocationName::Thermi,
        LocationName::Thessaloniki,
        LocationName::Volvi,
        LocationName::ThermaikosPort,
    ];

    /// The display name, identical to the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationName::AmpelokipiMenemeni => "Ampelokipi - Menemeni Municipality",
            LocationName::Chalkidona => "Chalkidona Municipality",
            LocationName::Delta => "Delta Municipality",
            LocationName::Kalamaria => "Kalamaria Municipality",
            LocationName::KordelioEvosmos => "Kordelio - Evosmos Municipality",
            LocationName::Lagadas => "Municipality of Lagadas",
            LocationName::NeapoliSykies => "Municipality of Neapoli-Sykies",
            LocationName::Oraiokastro => "Oreokastro Municipality",
            LocationName::PavlosMelas => "Pavlos Melas Municipality",
            LocationName::PylaiaChortiatis => "Municipality of Pylaia - Chortiatis",
            LocationName::Thermaikos => "Thermaikos Municipality",
            LocationName::Thermi => "Thermi Municipality",
            LocationName::Thessaloniki => "Municipality of Thessaloniki",
            LocationName::Volvi => "Volvi Municipality",
            LocationName::ThermaikosPort => "Thermaikos Port",
        }
    }

    /// The port is the only sea water monitoring site; every other location
    /// reports air quality.
    pub fn is_sea_water_site(&self) -> bool {
        matches!(self, LocationName::ThermaikosPort)
    }
}

impl fmt::Display for LocationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocationName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown location: {}", s))
    }
}

/// A monitored location and its boundary geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: LocationName,
    /// Polygons, each a list of rings of `(longitude, latitude)` pairs.
    pub multi_polygons: Vec<Vec<Ring>>,
}

impl Location {
    /// Iterate over every ring of every polygon.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.multi_polygons.iter().flat_map(|polygon| polygon.iter())
    }
}
