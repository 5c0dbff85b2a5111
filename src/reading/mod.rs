pub mod date;
pub mod measurement;

pub use date::{parse_amount, parse_day_first};
pub use measurement::{parse_measurements, Columns, Measurement};
