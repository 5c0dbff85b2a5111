use chrono::{Datelike, NaiveDate};

use super::Period;

/// A calendar quarter, `quarter` in 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter {
    pub year: i32,
    pub quarter: u32,
}

impl Quarter {
    pub fn new(year: i32, quarter: u32) -> Self {
        Quarter { year, quarter }
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl Period for Quarter {
    fn from_date(date: NaiveDate) -> Self {
        Quarter::new(date.year(), (date.month() - 1) / 3 + 1)
    }

    fn start(&self) -> NaiveDate {
        let first_month = (self.quarter - 1) * 3 + 1;
        NaiveDate::from_ymd_opt(self.year, first_month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// `2024 T1`
    fn label(&self) -> String {
        format!("{} T{}", self.year, self.quarter)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_truncate_to_quarter() {
        assert_eq!(Quarter::from_date(ymd(2024, 1, 1)), Quarter::new(2024, 1));
        assert_eq!(Quarter::from_date(ymd(2024, 3, 31)), Quarter::new(2024, 1));
        assert_eq!(Quarter::from_date(ymd(2024, 4, 1)), Quarter::new(2024, 2));
        assert_eq!(Quarter::from_date(ymd(2024, 9, 30)), Quarter::new(2024, 3));
        assert_eq!(Quarter::from_date(ymd(2024, 12, 31)), Quarter::new(2024, 4));
    }

    #[test]
    fn should_start_on_first_month_of_quarter() {
        assert_eq!(Quarter::new(2024, 3).start(), ymd(2024, 7, 1));
    }

    #[test]
    fn should_label_with_year_and_quarter() {
        assert_eq!(Quarter::new(2023, 4).label(), "2023 T4");
    }
}
