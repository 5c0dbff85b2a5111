//! Display strings for chart labels.

const FRENCH_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Abbreviated French month name for `month` in 1..=12.
pub fn french_month_abbrev(month: u32) -> &'static str {
    FRENCH_MONTHS[(month.clamp(1, 12) - 1) as usize]
}

/// Formats a rainfall amount for a bar label: two decimals at most, no
/// trailing zeros.
pub fn format_mm(mm: f64) -> String {
    let fixed = format!("{:.2}", mm);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" => "0".to_string(),
        s => s.to_string(),
    }
}
