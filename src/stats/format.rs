//! Number and date formatting for stats rows.

use chrono::{Local, NaiveDate};

/// Formats a count with `,` thousands separators.
///
/// # Examples
///
/// ```
/// use siteflow::stats::to_formatted_string;
///
/// assert_eq!(to_formatted_string(20), "20");
/// assert_eq!(to_formatted_string(12840), "12,840");
/// assert_eq!(to_formatted_string(1_000_000), "1,000,000");
/// ```
#[must_use]
pub fn to_formatted_string(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Supplies the dates stats navigation is anchored to.
pub trait StatsDateFormatter: Send + Sync {
    /// Today's date in the stats API format (`YYYY-MM-DD`).
    fn todays_date_in_stats_format(&self) -> String;
}

/// Stats date format used by the API.
pub const STATS_DATE_FORMAT: &str = "%Y-%m-%d";

/// [`StatsDateFormatter`] backed by the local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateFormatter;

impl StatsDateFormatter for LocalDateFormatter {
    fn todays_date_in_stats_format(&self) -> String {
        Local::now().date_naive().format(STATS_DATE_FORMAT).to_string()
    }
}

/// [`StatsDateFormatter`] pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedDateFormatter(pub NaiveDate);

impl StatsDateFormatter for FixedDateFormatter {
    fn todays_date_in_stats_format(&self) -> String {
        self.0.format(STATS_DATE_FORMAT).to_string()
    }
}
