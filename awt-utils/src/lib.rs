//! Shared utility functions for AirWaveThess crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateRangeError;
    use chrono::NaiveDate;

    /// Wire format for report query parameters and HTML date inputs.
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Parse the value of a date input, where an empty string means "not selected".
    pub fn parse_date_input(s: &str) -> Result<Option<NaiveDate>, DateRangeError> {
        if s.trim().is_empty() {
            return Ok(None);
        }
        parse_date(s)
            .map(Some)
            .map_err(|_| DateRangeError::Unparseable(s.to_string()))
    }

    /// Check a user-selected date range before anything is sent to the server.
    ///
    /// Both ends must be present and `from` must not be after `to`.
    pub fn validate_range(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<(NaiveDate, NaiveDate), DateRangeError> {
        match (from, to) {
            (Some(from), Some(to)) if from > to => Err(DateRangeError::Inverted),
            (Some(from), Some(to)) => Ok((from, to)),
            _ => Err(DateRangeError::Missing),
        }
    }

    /// Parse and validate the raw values of the "from" and "to" inputs.
    pub fn validate_range_inputs(
        from: &str,
        to: &str,
    ) -> Result<(NaiveDate, NaiveDate), DateRangeError> {
        validate_range(parse_date_input(from)?, parse_date_input(to)?)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_empty_input_is_not_selected() {
            assert_eq!(parse_date_input("").unwrap(), None);
            assert_eq!(parse_date_input("   ").unwrap(), None);
        }

        #[test]
        fn test_garbage_input_is_rejected() {
            assert_eq!(
                parse_date_input("2023-13-45"),
                Err(DateRangeError::Unparseable("2023-13-45".to_string()))
            );
        }

        #[test]
        fn test_inverted_range() {
            let err = validate_range_inputs("2024-01-01", "2023-01-01").unwrap_err();
            assert_eq!(err, DateRangeError::Inverted);
            assert_eq!(err.to_string(), "Invalid date range");
        }

        #[test]
        fn test_missing_range() {
            let err = validate_range_inputs("2024-01-01", "").unwrap_err();
            assert_eq!(err.to_string(), "Please select a date range");
        }

        #[test]
        fn test_same_day_range_is_valid() {
            let (from, to) = validate_range_inputs("2022-03-15", "2022-03-15").unwrap();
            assert_eq!(from, to);
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    /// Client-side date range validation failures. These are rendered inline
    /// and never reach the server.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DateRangeError {
        Missing,
        Inverted,
        Unparseable(String),
    }

    impl fmt::Display for DateRangeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                DateRangeError::Missing => write!(f, "Please select a date range"),
                DateRangeError::Inverted => write!(f, "Invalid date range"),
                DateRangeError::Unparseable(s) => write!(f, "Invalid date: {}", s),
            }
        }
    }

    impl std::error::Error for DateRangeError {}
}
