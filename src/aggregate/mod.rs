//! Sums of rainfall over calendar buckets.

pub mod labels;
pub mod monthly;
pub mod quarterly;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::reading::Measurement;

pub use labels::{format_mm, french_month_abbrev};
pub use monthly::Month;
pub use quarterly::Quarter;

/// A calendar bucket that a measurement date can be truncated to.
pub trait Period: Ord + Copy {
    fn from_date(date: NaiveDate) -> Self;
    /// First day of the bucket.
    fn start(&self) -> NaiveDate;
    /// Display label used on chart axes.
    fn label(&self) -> String;
}

/// Rainfall summed over one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Total<P> {
    pub period: P,
    pub mm: f64,
}

/// Sums the measurements per period, in chronological order. Periods with no
/// measurement are absent.
pub fn aggregate<P: Period>(measurements: &[Measurement]) -> Vec<Total<P>> {
    let mut totals: BTreeMap<P, f64> = BTreeMap::new();

    for measurement in measurements {
        *totals.entry(P::from_date(measurement.date)).or_insert(0.0) += measurement.mm;
    }

    totals
        .into_iter()
        .map(|(period, mm)| Total { period, mm })
        .collect()
}

// -- Tests -------------------------------------------------------------------
