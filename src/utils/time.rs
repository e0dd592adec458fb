//! Time utilities: parsing stored date/time text and the display formats
//! used by the dashboard.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const DATE_FMT: &str = "%Y-%m-%d";
/// Period bound / bar start label, e.g. `08:00:00 (01.01)`.
pub const PERIOD_FMT: &str = "%H:%M:%S (%d.%m)";
/// Short shift day label used in the timeline hover, e.g. `01.01.24`.
pub const SHORT_DAY_FMT: &str = "%d.%m.%y";
/// Hour tick label on the timeline axis.
pub const TICK_FMT: &str = "%H";

const DATETIME_FMTS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

/// Accepts the SQLAlchemy storage form (`2024-01-01 08:00:00.000000`),
/// ISO `T` separators, and minute precision.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FMTS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

pub fn format_period(ts: &NaiveDateTime) -> String {
    ts.format(PERIOD_FMT).to_string()
}

pub fn format_short_day(d: &NaiveDate) -> String {
    d.format(SHORT_DAY_FMT).to_string()
}

/// Canonical text form used for stored timestamps and option values.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
