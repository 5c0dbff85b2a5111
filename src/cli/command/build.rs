use std::path::PathBuf;

use anyhow::Result;

use crate::cli::{BuildArgs, SourceArgs};

use super::render_pages;

/// Renders the pages without touching version control.
pub async fn build(source: &SourceArgs, args: &BuildArgs) -> Result<Vec<PathBuf>> {
    render_pages(source, &args.output_dir).await
}
