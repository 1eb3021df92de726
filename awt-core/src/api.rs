//! Report API client.
//!
//! Response interpretation and the validate-then-fetch flow are plain
//! functions so they work the same for the HTTP client and for test doubles.
//! The `reqwest` client itself lives behind the `api` feature.

use crate::error::{ApiError, Result};
use crate::report::{Report, ReportInvalidRange, ReportOutcome};
use awt_utils::dates::{format_date, validate_range_inputs};
use chrono::NaiveDate;
use log::{info, warn};

#[cfg(feature = "api")]
use crate::{chat::ChatMessage, config::ApiConfig, location::Location, report::AcceptableDateRange};

/// Anything that can answer a report query for a validated date range.
#[allow(async_fn_in_trait)]
pub trait ReportSource {
    async fn get_report(&self, from: NaiveDate, to: NaiveDate) -> Result<ReportOutcome>;
}

/// Turn the status and body of a `/report` response into an outcome.
///
/// Success bodies must parse as a [`Report`]. Failure bodies carrying an
/// acceptable date range become [`ReportOutcome::Rejected`]; anything else is
/// an [`ApiError::UnexpectedStatus`].
pub fn interpret_report_response(status: u16, body: &str) -> Result<ReportOutcome> {
    if (200..300).contains(&status) {
        let report: Report = serde_json::from_str(body)?;
        return Ok(ReportOutcome::Report(Box::new(report)));
    }
    match serde_json::from_str::<ReportInvalidRange>(body) {
        Ok(invalid) => Ok(ReportOutcome::Rejected(invalid.acceptable_date_range)),
        Err(_) => Err(ApiError::UnexpectedStatus {
            status,
            body: body.to_string(),
        }),
    }
}

/// Validate the raw date inputs and fetch a report.
///
/// Every failure (bad input, rejected range, transport) comes back as the
/// message to show the user. Invalid input never reaches `source`.
pub async fn load_report<S: ReportSource>(
    source: &S,
    from_input: &str,
    to_input: &str,
) -> std::result::Result<Report, String> {
    let (from, to) = validate_range_inputs(from_input, to_input).map_err(|e| e.to_string())?;

    info!(
        "Requesting report from {} to {}",
        format_date(&from),
        format_date(&to)
    );
    match source.get_report(from, to).await {
        Ok(ReportOutcome::Report(report)) => {
            info!("Report received with {} records", report.record_count());
            Ok(*report)
        }
        Ok(ReportOutcome::Rejected(range)) => {
            warn!("Report range rejected: {}", range);
            Err(range.to_string())
        }
        Err(e) => {
            warn!("Report request failed: {}", e);
            Err(format!("Failed to load report: {}", e))
        }
    }
}

/// HTTP client for the report API.
#[cfg(feature = "api")]
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

#[cfg(feature = "api")]
impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch every monitored location with its geometry.
    pub async fn get_locations(&self) -> Result<Vec<Location>> {
        let url = self.config.endpoint("locations");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let locations: Vec<Location> = response.json().await?;
        info!("Fetched {} locations", locations.len());
        Ok(locations)
    }

    /// Fetch the date range the server holds data for.
    pub async fn get_date_range(&self) -> Result<AcceptableDateRange> {
        let url = self.config.endpoint("date-range");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Send the whole conversation and receive it back with the reply appended.
    pub async fn send_chat(&self, messages: &[ChatMessage]) -> Result<Vec<ChatMessage>> {
        let url = self.config.endpoint("chat");
        let response = self
            .client
            .post(&url)
            .json(messages)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[cfg(feature = "api")]
impl ReportSource for ApiClient {
    async fn get_report(&self, from: NaiveDate, to: NaiveDate) -> Result<ReportOutcome> {
        let url = self.config.endpoint("report");
        let response = self
            .client
            .get(&url)
            .query(&[("from_date", format_date(&from)), ("to_date", format_date(&to))])
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        interpret_report_response(status, &body)
    }
}
