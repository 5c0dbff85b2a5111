pub mod build;
pub mod publish;
pub mod summary;

use std::path::{Path, PathBuf};

use anyhow::Result;
use reqwest::Client;

pub use build::build;
pub use publish::publish;
pub use summary::summary;

use crate::{
    chart::{
        page::{write_pages, PLOTLY_JS_URL},
        Charts,
    },
    download::{fetch_csv, fetch_text},
    reading::{parse_measurements, Measurement},
};

use super::SourceArgs;

/// Downloads and cleans the measurement table.
pub async fn load_measurements(source: &SourceArgs) -> Result<Vec<Measurement>> {
    let csv_text = fetch_csv(&source.url).await?;

    parse_measurements(&csv_text, &source.columns())
}

/// Downloads the sheet and plotly.js, then writes the four pages into
/// `output_dir` with the library inlined.
pub async fn render_pages(source: &SourceArgs, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let measurements = load_measurements(source).await?;
    let charts = Charts::build(&measurements, &source.site);
    let plotly_js = fetch_text(&Client::new(), PLOTLY_JS_URL, "plotly.js").await?;

    write_pages(output_dir, &charts, &plotly_js)
}
