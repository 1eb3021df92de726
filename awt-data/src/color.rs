//! Indicator to colour mapping.
//!
//! Two ramps are used on the map:
//! - a continuous green -> yellow -> red ramp over `[0, 100]`, applied to the
//!   sea water quality index (inverted, since a high WQI is good water), and
//! - a discrete six band ramp for the European air quality index.
//!
//! Neither ramp clamps its input. Values outside the nominal domain follow the
//! linear formula past the ends, and the resulting channels may fall outside
//! `0..=255`; browsers clamp them when painting.

use std::fmt;

/// An RGB colour. Channels are not clamped, see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Continuous ramp: 0 is green, 50 is yellow, 100 is red.
pub fn color_from_indicator(indicator: f64) -> Rgb {
    if indicator <= 50.0 {
        Rgb::new((255.0 * indicator / 50.0).round() as i32, 255, 0)
    } else {
        Rgb::new(255, (255.0 - 255.0 * (indicator - 50.0) / 50.0).round() as i32, 0)
    }
}

/// Colour for a sea water quality index (0 worst, 100 best).
///
/// The continuous ramp is applied to `100 - wqi` so clean water is green.
pub fn sea_water_color(water_quality_index: f64) -> Rgb {
    color_from_indicator(100.0 - water_quality_index)
}

/// European air quality index bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AqiBand {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
    ExtremelyPoor,
}

impl AqiBand {
    pub const ALL: [AqiBand; 6] = [
        AqiBand::Good,
        AqiBand::Fair,
        AqiBand::Moderate,
        AqiBand::Poor,
        AqiBand::VeryPoor,
        AqiBand::ExtremelyPoor,
    ];

    /// Band for an index value. Thresholds sit on the integers 1 to 5, each
    /// band including its lower bound. NaN falls through to the worst band.
    pub fn from_index(indicator: f64) -> Self {
        if indicator < 1.0 {
            AqiBand::Good
        } else if indicator < 2.0 {
            AqiBand::Fair
        } else if indicator < 3.0 {
            AqiBand::Moderate
        } else if indicator < 4.0 {
            AqiBand::Poor
        } else if indicator < 5.0 {
            AqiBand::VeryPoor
        } else {
            AqiBand::ExtremelyPoor
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            AqiBand::Good => Rgb::new(0, 0, 139),
            AqiBand::Fair => Rgb::new(0, 119, 255),
            AqiBand::Moderate => Rgb::new(32, 194, 40),
            AqiBand::Poor => Rgb::new(192, 192, 25),
            AqiBand::VeryPoor => Rgb::new(255, 127, 0),
            AqiBand::ExtremelyPoor => Rgb::new(255, 0, 0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiBand::Good => "Good",
            AqiBand::Fair => "Fair",
            AqiBand::Moderate => "Moderate",
            AqiBand::Poor => "Poor",
            AqiBand::VeryPoor => "Very poor",
            AqiBand::ExtremelyPoor => "Extremely poor",
        }
    }
}

/// Colour for an air quality index value.
pub fn air_band_color(air_quality_index: f64) -> Rgb {
    AqiBand::from_index(air_quality_index).color()
}

/// Legend stops for the sea water ramp, from worst to best.
pub fn sea_water_legend() -> Vec<(f64, Rgb)> {
    [0.0, 25.0, 50.0, 75.0, 100.0]
        .into_iter()
        .map(|wqi| (wqi, sea_water_color(wqi)))
        .collect()
}
