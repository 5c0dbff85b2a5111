//! Standalone HTML pages for the charts and the landing page framing them.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

use super::{Charts, Figure};

pub const DAILY_PAGE: &str = "graphique_par_jour.html";
pub const MONTHLY_PAGE: &str = "graphique_par_mois.html";
pub const QUARTERLY_PAGE: &str = "graphique_par_trimestre.html";
pub const INDEX_PAGE: &str = "index.html";

/// plotly.js release inlined into every chart page.
pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Renders a figure as a self-contained interactive page, with the plotly.js
/// source inlined so the page works offline.
pub fn chart_page(figure: &Figure, div_id: &str, plotly_js: &str) -> Result<String> {
    let data = script_json(&figure.data)?;
    let layout = script_json(&figure.layout)?;

    Ok(format!(
        r#"<html>
<head><meta charset="utf-8" /></head>
<body>
    <div id="{id}" class="plotly-graph-div" style="height:100%; width:100%;"></div>
    <script type="text/javascript">{plotly}</script>
    <script type="text/javascript">
        Plotly.newPlot("{id}", {data}, {layout}, {{"responsive": true}});
    </script>
</body>
</html>
"#,
        id = div_id,
        plotly = plotly_js,
        data = data,
        layout = layout,
    ))
}

/// Frames each chart page, in order, on a single page.
pub fn landing_page(pages: &[&str]) -> String {
    let mut html = String::from("<html><body>\n");
    for page in pages {
        html.push_str(&format!(
            "<iframe src=\"{}\" width=\"100%\" height=\"700px\"></iframe>\n",
            page
        ));
    }
    html.push_str("</body></html>\n");

    html
}

/// Writes the three chart pages and the landing page into `output_dir`.
///
/// Returns the four paths, landing page last.
pub fn write_pages(output_dir: &Path, charts: &Charts, plotly_js: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create `{}`", output_dir.display()))?;

    let chart_pages = [
        (DAILY_PAGE, "jour", &charts.daily),
        (MONTHLY_PAGE, "mois", &charts.monthly),
        (QUARTERLY_PAGE, "trimestre", &charts.quarterly),
    ];

    let mut written = Vec::with_capacity(chart_pages.len() + 1);
    for (file_name, div_id, figure) in chart_pages {
        let html = chart_page(figure, div_id, plotly_js)?;
        written.push(write_atomically(&output_dir.join(file_name), &html)?);
    }

    let names: Vec<&str> = chart_pages.iter().map(|(name, _, _)| *name).collect();
    written.push(write_atomically(
        &output_dir.join(INDEX_PAGE),
        &landing_page(&names),
    )?);

    Ok(written)
}

// The figure JSON sits inside a <script> element, which `</` would close.
fn script_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).context("Failed to serialize figure")?;
    Ok(json.replace("</", "<\\/"))
}

fn write_atomically(path: &Path, contents: &str) -> Result<PathBuf> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.persist(path)
        .with_context(|| format!("Failed to write `{}`", path.display()))?;

    debug!(path = %path.display(), bytes = contents.len(), "Page written");

    Ok(path.to_path_buf())
}

// -- Tests -------------------------------------------------------------------
