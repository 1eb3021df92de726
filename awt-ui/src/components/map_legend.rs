//! Colour keys for the two map ramps.

use awt_data::color::{sea_water_legend, AqiBand};
use dioxus::prelude::*;

#[component]
fn Swatch(color: String, text: String) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 6px; font-size: 12px;",
            span { style: "display: inline-block; width: 14px; height: 14px; background: {color};" }
            "{text}"
        }
    }
}

/// Legend for the air quality bands and the sea water index ramp.
#[component]
pub fn MapLegend() -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 24px; flex-wrap: wrap; margin-top: 8px;",
            div {
                h4 { style: "margin: 0 0 4px 0; font-size: 13px;", "Air Quality Index" }
                for (i, band) in AqiBand::ALL.iter().enumerate() {
                    Swatch {
                        key: "{i}",
                        color: band.color().to_string(),
                        text: format!("{} {}", i + 1, band.label()),
                    }
                }
            }
            div {
                h4 { style: "margin: 0 0 4px 0; font-size: 13px;", "Sea Water Quality Index" }
                for (wqi, color) in sea_water_legend().into_iter().rev() {
                    Swatch {
                        key: "{wqi}",
                        color: color.to_string(),
                        text: format!("{}", wqi),
                    }
                }
            }
        }
    }
}
