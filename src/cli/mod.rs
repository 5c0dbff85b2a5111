//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use indicatif::ProgressBar;

use crate::{
    chart::DEFAULT_SITE,
    git::{DEFAULT_COMMIT_MESSAGE, DEFAULT_REMOTE},
    reading::Columns,
};

pub const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1HL-9V6yhFDP1BtO7AaqcHWNaeueUyEVq5LSaoEYWQyk/export?format=csv";

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Charts a rain gauge sheet and publishes the pages. Runs `publish` when no
/// command is given.
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub publish: PublishArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the charts, commit and push them, then open the landing page
    Publish(PublishArgs),
    /// Render the charts without publishing them
    Build(BuildArgs),
    /// Print the monthly and quarterly totals
    Summary {},
}

/// Where the measurements come from and how the charts are titled.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// CSV export URL of the rainfall sheet
    #[arg(long, env = "PLUVIO_SHEET_URL", default_value = SHEET_URL, global = true)]
    pub url: String,

    /// Header of the date column
    #[arg(long, env = "PLUVIO_DATE_COLUMN", default_value = "DateR", global = true)]
    pub date_column: String,

    /// Header of the rainfall column, in millimetres
    #[arg(long, env = "PLUVIO_AMOUNT_COLUMN", default_value = "Mm", global = true)]
    pub amount_column: String,

    /// Gauge location shown in chart titles
    #[arg(long, env = "PLUVIO_SITE", default_value = DEFAULT_SITE, global = true)]
    pub site: String,
}

impl SourceArgs {
    pub fn columns(&self) -> Columns {
        Columns {
            date: self.date_column.clone(),
            amount: self.amount_column.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PublishArgs {
    /// Git working tree to publish from
    #[arg(long, env = "PLUVIO_REPO", default_value = ".")]
    pub repo: PathBuf,

    /// Directory for the pages, inside the working tree [default: the repo]
    #[arg(long, env = "PLUVIO_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Remote to push to
    #[arg(long, env = "PLUVIO_REMOTE", default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Commit message
    #[arg(long, env = "PLUVIO_COMMIT_MESSAGE", default_value = DEFAULT_COMMIT_MESSAGE)]
    pub message: String,

    /// Commit without pushing
    #[arg(long)]
    pub no_push: bool,

    /// Do not open the landing page
    #[arg(long)]
    pub no_open: bool,
}

impl PublishArgs {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| self.repo.clone())
    }
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Directory for the pages
    #[arg(long, env = "PLUVIO_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

// -- Tests -------------------------------------------------------------------
