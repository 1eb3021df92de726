//! Command implementations for the AirWaveThess CLI.
//!
//! Provides subcommands for listing locations, checking the available date
//! range, printing a report the way the dashboard would colour it, and
//! asking the assistant a question.

use awt_core::api::ApiClient;
use awt_core::config::ApiConfig;
use awt_core::location::LocationName;
use awt_data::view_mode::ViewMode;
use clap::Subcommand;
use std::path::PathBuf;

pub mod chat;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// List monitored locations
    Locations,

    /// Show the date range the server has data for
    DateRange,

    /// Fetch a report and print each location's index and map colour
    Report {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long, default_value = "2020-01-01")]
        from: String,

        /// Last day of the range (YYYY-MM-DD)
        #[arg(long, default_value = "2024-12-01")]
        to: String,

        /// View mode: data, story or compare
        #[arg(long, default_value = "data")]
        mode: ViewMode,

        /// Story period to show (story mode; defaults to the first period)
        #[arg(long)]
        period: Option<String>,

        /// Locations to compare (compare mode), by display name
        #[arg(long, num_args = 1..)]
        compare: Vec<LocationName>,

        /// Write the comparison table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Ask the assistant a question
    Chat {
        /// The prompt to send
        prompt: String,
    },
}

pub async fn run(config: ApiConfig, command: Command) -> anyhow::Result<()> {
    let client = ApiClient::new(config);
    match command {
        Command::Locations => report::run_locations(&client).await,
        Command::DateRange => report::run_date_range(&client).await,
        Command::Report {
            from,
            to,
            mode,
            period,
            compare,
            csv,
        } => {
            let options = report::ReportOptions {
                mode,
                period,
                compare,
                csv,
            };
            report::run_report(&client, &from, &to, &options).await
        }
        Command::Chat { prompt } => chat::run_chat(&client, &prompt).await,
    }
}
