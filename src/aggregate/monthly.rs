use chrono::{Datelike, NaiveDate};

use super::{french_month_abbrev, Period};

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Self {
        Month { year, month }
    }
}

impl Period for Month {
    fn from_date(date: NaiveDate) -> Self {
        Month::new(date.year(), date.month())
    }

    fn start(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// French `MMM YY`, e.g. `janv. 24`.
    fn label(&self) -> String {
        format!(
            "{} {:02}",
            french_month_abbrev(self.month),
            self.year.rem_euclid(100)
        )
    }
}
