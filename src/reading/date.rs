//! Day-first date and numeric amount parsing for spreadsheet cells.

use chrono::{NaiveDate, NaiveDateTime};

// %y must come before %Y: %Y accepts a two digit year as-is, while %y
// rejects four digits.
const DATE_FORMATS: [&str; 7] = [
    "%d/%m/%y",
    "%d/%m/%Y",
    "%d-%m-%y",
    "%d-%m-%Y",
    "%d.%m.%y",
    "%d.%m.%Y",
    "%Y-%m-%d",
];

const DATETIME_FORMATS: [&str; 8] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parses a date cell, reading ambiguous numeric dates day first.
///
/// A time of day, if present, is discarded.
pub fn parse_day_first(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cell, format).ok())
        .or_else(|| parse_datetime(cell))
}

fn parse_datetime(cell: &str) -> Option<NaiveDate> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(cell, format).ok())
        .map(|datetime| datetime.date())
}

/// Coerces an amount cell to millimetres. Anything that is not a finite
/// decimal number yields `None`.
pub fn parse_amount(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// -- Tests -------------------------------------------------------------------
