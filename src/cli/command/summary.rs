use anyhow::Result;

use crate::{
    aggregate::{aggregate, format_mm, Month, Period, Quarter, Total},
    cli::SourceArgs,
};

use super::load_measurements;

/// Prints the monthly and quarterly totals. Returns the number of readings.
pub async fn summary(source: &SourceArgs) -> Result<usize> {
    let measurements = load_measurements(source).await?;

    println!("{}", format_totals("Month", &aggregate::<Month>(&measurements)));
    println!("{}", format_totals("Quarter", &aggregate::<Quarter>(&measurements)));

    Ok(measurements.len())
}

fn format_totals<P: Period>(heading: &str, totals: &[Total<P>]) -> String {
    let mut table = format!("{:<10} {:>8}\n", heading, "Mm");
    for total in totals {
        table.push_str(&format!(
            "{:<10} {:>8}\n",
            total.period.label(),
            format_mm(total.mm)
        ));
    }

    table
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_format_table() {
        let totals = vec![
            Total { period: Month::new(2024, 1), mm: 4.3 },
            Total { period: Month::new(2024, 2), mm: 4.0 },
        ];

        assert_eq!(
            format_totals("Month", &totals),
            "Month            Mm\njanv. 24        4.3\nfévr. 24          4\n"
        );
    }
}
