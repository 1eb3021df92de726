//! Report, location and date range commands.

use awt_core::api::{load_report, ApiClient};
use awt_core::location::{Location, LocationName};
use awt_core::report::Report;
use awt_data::color::AqiBand;
use awt_data::comparison::ComparisonTable;
use awt_data::map::{build_map_layer, LocationShape};
use awt_data::view_mode::{DashboardView, ViewMode};
use log::{info, warn};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// How to present a fetched report.
pub struct ReportOptions {
    pub mode: ViewMode,
    pub period: Option<String>,
    pub compare: Vec<LocationName>,
    pub csv: Option<PathBuf>,
}

/// Print every location with its geometry size.
pub async fn run_locations(client: &ApiClient) -> anyhow::Result<()> {
    let locations = client.get_locations().await?;
    for location in &locations {
        println!(
            "{}\t{} rings\t{}",
            location.name,
            location.rings().count(),
            if location.name.is_sea_water_site() {
                "sea water"
            } else {
                "air"
            }
        );
    }
    Ok(())
}

pub async fn run_date_range(client: &ApiClient) -> anyhow::Result<()> {
    let range = client.get_date_range().await?;
    println!("{}", range);
    Ok(())
}

/// Fetch the report for the range and print it as the map would show it.
pub async fn run_report(
    client: &ApiClient,
    from: &str,
    to: &str,
    options: &ReportOptions,
) -> anyhow::Result<()> {
    let locations = client.get_locations().await?;
    let report = load_report(client, from, to)
        .await
        .map_err(|message| anyhow::anyhow!(message))?;

    let view = build_view(&report, options)?;
    if view.mode() == ViewMode::Story {
        println!("Periods: {}", view.playback().steps().join(", "));
        if let Some(period) = view.current_period() {
            println!("Showing {}", period);
        }
    }

    for line in layer_lines(&build_map_layer(&locations, &report, &view)) {
        println!("{}", line);
    }
    print_missing(&locations, &report, &view);

    if view.mode() == ViewMode::Compare {
        let table = ComparisonTable::build(&report, view.compare_locations());
        println!();
        println!("{}", table.columns.join("\t"));
        for row in &table.rows {
            println!("{}", row.cells.join("\t"));
        }
        if let Some(path) = &options.csv {
            let file = File::create(path)?;
            write_comparison_csv(&table, file)?;
            info!("Comparison written to {}", path.display());
        }
    } else if options.csv.is_some() {
        warn!("--csv only applies in compare mode");
    }
    Ok(())
}

/// Set up the view state the same way the dashboard would for these options.
pub fn build_view(report: &Report, options: &ReportOptions) -> anyhow::Result<DashboardView> {
    let mut view = DashboardView::new();
    view.apply_report(report);
    view.set_compare_locations(options.compare.iter().copied());
    view.set_mode(options.mode);
    if let Some(period) = &options.period {
        if !view.playback_mut().seek(period) {
            anyhow::bail!(
                "No story data for period {} (available: {})",
                period,
                view.playback().steps().join(", ")
            );
        }
    }
    Ok(view)
}

/// One tab-separated line per drawn location: name, index, colour, band.
pub fn layer_lines(shapes: &[LocationShape]) -> Vec<String> {
    shapes
        .iter()
        .map(|shape| {
            let band = if shape.location.is_sea_water_site() {
                "sea water".to_string()
            } else {
                AqiBand::from_index(shape.indicator).label().to_string()
            };
            format!(
                "{}\t{:.2}\t{}\t{}",
                shape.location, shape.indicator, shape.fill_color, band
            )
        })
        .collect()
}

fn print_missing(locations: &[Location], report: &Report, view: &DashboardView) {
    let drawn: Vec<LocationName> = build_map_layer(locations, report, view)
        .iter()
        .map(|s| s.location)
        .collect();
    for location in view.active_locations(locations) {
        if !drawn.contains(&location.name) {
            println!("{}\tno data", location.name);
        }
    }
}

/// Write the comparison table as CSV with a header row.
pub fn write_comparison_csv<W: Write>(table: &ComparisonTable, writer: W) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&table.columns)?;
    for row in &table.rows {
        csv.write_record(&row.cells)?;
    }
    csv.flush()?;
    Ok(())
}
