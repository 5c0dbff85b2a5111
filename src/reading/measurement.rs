//! Rainfall measurement rows and the CSV table parser.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

use super::{parse_amount, parse_day_first};

/// One rain gauge reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub date: NaiveDate,
    pub mm: f64,
}

/// Names of the source table's date and amount columns.
#[derive(Debug, Clone)]
pub struct Columns {
    pub date: String,
    pub amount: String,
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            date: "DateR".to_string(),
            amount: "Mm".to_string(),
        }
    }
}

/// Parses the exported sheet into measurements sorted by date.
///
/// Rows with a blank date or an amount that is not a number are dropped. A
/// date that is present but unreadable is an error.
pub fn parse_measurements(csv_text: &str, columns: &Columns) -> Result<Vec<Measurement>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let date_index = column_index(&headers, &columns.date)?;
    let amount_index = column_index(&headers, &columns.amount)?;

    let mut measurements = Vec::new();
    let mut dropped = 0usize;

    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV row {}", row + 2))?;
        let date_cell = record.get(date_index).unwrap_or("");
        let amount_cell = record.get(amount_index).unwrap_or("");

        if date_cell.trim().is_empty() {
            dropped += 1;
            continue;
        }

        let date = parse_day_first(date_cell)
            .ok_or_else(|| anyhow!("Unreadable date `{}` on CSV row {}", date_cell, row + 2))?;

        let Some(mm) = parse_amount(amount_cell) else {
            debug!(row = row + 2, amount = amount_cell, "Dropping row with non-numeric amount");
            dropped += 1;
            continue;
        };

        measurements.push(Measurement { date, mm });
    }

    // stable: same-day readings keep their sheet order
    measurements.sort_by_key(|m| m.date);

    info!(kept = measurements.len(), dropped, "Parsed measurements");

    Ok(measurements)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().trim_start_matches('\u{feff}') == name)
        .ok_or_else(|| anyhow!("Column `{}` not found in sheet header {:?}", name, headers))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_parse_sheet() {
        let csv = "DateR,Mm\n05/01/2024,3.2\n19/01/2024,1.1\n02/02/2024,4\n";
        let measurements = parse_measurements(csv, &Columns::default()).unwrap();

        assert_eq!(
            measurements,
            vec![
                Measurement { date: ymd(2024, 1, 5), mm: 3.2 },
                Measurement { date: ymd(2024, 1, 19), mm: 1.1 },
                Measurement { date: ymd(2024, 2, 2), mm: 4.0 },
            ]
        );
    }

    #[test]
    fn should_only_keep_numeric_amounts() {
        let csv = "DateR,Mm\n01/03/2024,2.5\n02/03/2024,\n03/03/2024,pluie\n04/03/2024,0\n";
        let measurements = parse_measurements(csv, &Columns::default()).unwrap();

        assert_eq!(measurements.len(), 2);
        assert!(measurements.iter().all(|m| m.mm.is_finite()));
        assert_eq!(measurements[0].date, ymd(2024, 3, 1));
        assert_eq!(measurements[1].mm, 0.0);
    }

    #[test]
    fn should_skip_blank_lines_from_the_sheet() {
        let csv = "DateR,Mm\n01/03/2024,2.5\n,\n,\n";
        let measurements = parse_measurements(csv, &Columns::default()).unwrap();

        assert_eq!(measurements.len(), 1);
    }

    #[test]
    fn should_sort_by_date() {
        let csv = "DateR,Mm\n10/04/2024,1\n01/04/2024,2\n05/04/2024,3\n";
        let measurements = parse_measurements(csv, &Columns::default()).unwrap();

        let dates: Vec<_> = measurements.iter().map(|m| m.date).collect();
        assert_eq!(dates, vec![ymd(2024, 4, 1), ymd(2024, 4, 5), ymd(2024, 4, 10)]);
    }

    #[test]
    fn should_ignore_extra_columns_and_order() {
        let csv = "Remarque,Mm,DateR\norage,12.5,15/06/2024\n,0.5,16/06/2024\n";
        let measurements = parse_measurements(csv, &Columns::default()).unwrap();

        assert_eq!(measurements.len(), 2);
        assert_eq!(measurements[0], Measurement { date: ymd(2024, 6, 15), mm: 12.5 });
    }

    #[test]
    fn should_accept_short_rows() {
        let csv = "DateR,Mm,Remarque\n15/06/2024,3\n";
        let measurements = parse_measurements(csv, &Columns::default()).unwrap();

        assert_eq!(measurements.len(), 1);
    }

    #[test]
    fn should_use_configured_column_names() {
        let csv = "jour,pluie\n15/06/2024,3\n";
        let columns = Columns {
            date: "jour".to_string(),
            amount: "pluie".to_string(),
        };
        let measurements = parse_measurements(csv, &columns).unwrap();

        assert_eq!(measurements, vec![Measurement { date: ymd(2024, 6, 15), mm: 3.0 }]);
    }

    #[test]
    fn should_fail_on_missing_column() {
        let csv = "Date,Mm\n15/06/2024,3\n";
        let err = parse_measurements(csv, &Columns::default()).unwrap_err();

        assert!(err.to_string().contains("DateR"));
    }

    #[test]
    fn should_fail_on_unreadable_date() {
        let csv = "DateR,Mm\nlundi,3\n";
        let err = parse_measurements(csv, &Columns::default()).unwrap_err();

        assert!(err.to_string().contains("lundi"));
    }

    #[test]
    fn should_fail_on_unreadable_date_with_blank_amount() {
        let csv = "DateR,Mm\n05/01/2024,3.2\nlundi,\n";
        let err = parse_measurements(csv, &Columns::default()).unwrap_err();

        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn should_fail_on_unreadable_date_with_text_amount() {
        let csv = "DateR,Mm\nlundi,pluie\n";

        assert!(parse_measurements(csv, &Columns::default()).is_err());
    }
}
