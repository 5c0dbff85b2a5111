//! Opens a local page in the default viewer.

use std::{path::Path, process::Command};

use anyhow::{Context, Result};
use tracing::info;

/// `file://` URL of an existing file.
pub fn file_url(path: &Path) -> Result<String> {
    let absolute = path
        .canonicalize()
        .with_context(|| format!("Cannot open `{}`", path.display()))?;

    Ok(format!("file://{}", absolute.display()))
}

/// Hands the page to the platform's opener without waiting for the viewer.
pub fn open(path: &Path) -> Result<()> {
    let url = file_url(path)?;
    info!(%url, "Opening landing page");

    opener(&url)
        .spawn()
        .with_context(|| format!("Failed to open `{}`", url))?;

    Ok(())
}

fn opener(url: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}

// -- Tests -------------------------------------------------------------------
