// File: formguard-core/src/validators.rs
//! Programmatic checks that go beyond what a regular expression can express.
//!
//! The `date` pattern rule only checks the `YYYY-MM-DD` shape. Whether the
//! string names a real day of the proleptic Gregorian calendar is decided here.
//!
//! License: MIT OR APACHE 2.0

use chrono::format::ParseError;
use chrono::NaiveDate;

/// ISO-8601 calendar date, `YYYY-MM-DD`.
pub const ISO_LOCAL_DATE: &str = "%Y-%m-%d";

/// Parses `date` as a real calendar date.
///
/// Leap years are honoured, so `2024-02-29` parses and `2023-02-29` does not.
/// The error's `Display` text ("input is out of range", "input contains
/// invalid characters", ...) is what the form validator reports.
pub fn parse_calendar_date(date: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(date, ISO_LOCAL_DATE)
}
