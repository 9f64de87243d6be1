//! Calendar-date serde helpers.
//!
//! All dates in allowlists and reports use the `YYYY-MM-DD` form.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// `YYYY-MM-DD`.
pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    // A fixed numeric format cannot fail for in-range dates.
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, ISO_DATE)
}
