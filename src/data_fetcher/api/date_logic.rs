//! Target date determination and output file naming

use chrono::{Days, Local, NaiveDate};
use tracing::info;

use crate::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The local calendar day `days_ahead` days after `today`.
pub fn target_date_from(today: NaiveDate, days_ahead: i64) -> NaiveDate {
    if days_ahead >= 0 {
        today + Days::new(days_ahead.unsigned_abs())
    } else {
        today - Days::new(days_ahead.unsigned_abs())
    }
}

/// Tomorrow (for `days_ahead == 1`) in local time.
pub fn determine_target_date(days_ahead: i64) -> NaiveDate {
    let date = target_date_from(Local::now().date_naive(), days_ahead);
    info!("Target date: {date} (today + {days_ahead})");
    date
}

/// Parses a user supplied `YYYY-MM-DD` date.
pub fn parse_target_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid date '{date}', expected YYYY-MM-DD: {e}"))
    })
}

/// `days` consecutive dates starting at `start`, formatted `YYYY-MM-DD`.
pub fn consecutive_dates(start: NaiveDate, days: u32) -> Vec<String> {
    (0..days)
        .map(|offset| {
            target_date_from(start, i64::from(offset))
                .format(DATE_FORMAT)
                .to_string()
        })
        .collect()
}

/// Output file name for a date: separators removed, `.json` appended.
///
/// # Example
/// ```
/// use fixture_tv::data_fetcher::api::output_file_name;
///
/// assert_eq!(output_file_name("2024-01-15"), "20240115.json");
/// ```
pub fn output_file_name(date: &str) -> String {
    format!("{}.json", date.replace('-', ""))
}
