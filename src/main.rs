mod aggregate;
mod browser;
mod chart;
mod cli;
mod download;
mod git;
mod reading;

use anyhow::Error;
use clap::Parser;
use cli::{command, Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset: info for every target.
const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Publish(cli.publish)) {
        Commands::Publish(args) => match command::publish(&cli.source, &args).await {
            Ok(index) => println!("Pages published, landing page at `{}`", index),
            Err(e) => fail(e),
        },
        Commands::Build(args) => match command::build(&cli.source, &args).await {
            Ok(pages) => {
                for page in pages {
                    println!("File saved to `{}`", page.display());
                }
            }
            Err(e) => fail(e),
        },
        Commands::Summary {} => match command::summary(&cli.source).await {
            Ok(count) => println!("{} readings", count),
            Err(e) => fail(e),
        },
    }
}

fn fail(e: Error) -> ! {
    eprintln!("Error: {:#}", e);
    std::process::exit(1)
}

// -- Tests -------------------------------------------------------------------
