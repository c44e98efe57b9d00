//! irs-pdf-crawler main entry point
//!
//! Running the binary with no arguments performs the full crawl using the
//! built-in defaults.

use anyhow::Context;
use clap::Parser;
use irs_pdf_crawler::config::{load_config_with_hash, Config};
use irs_pdf_crawler::crawler::run_crawl;
use irs_pdf_crawler::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// irs-pdf-crawler: harvest PDF links from every page in a sitemap
///
/// Fetches the sitemap, visits each listed page one at a time, and writes the
/// sorted, deduplicated PDF links to a text file.
#[derive(Parser, Debug)]
#[command(name = "irs-pdf-crawler")]
#[command(version)]
#[command(about = "Harvest PDF links from every page in a sitemap", long_about = None)]
struct Cli {
    /// Optional TOML file overriding the built-in settings
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Do not draw the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if cli.no_progress || cli.quiet {
        config.show_progress = false;
    }

    let report = run_crawl(config).await.context("Crawl failed")?;

    if !cli.quiet {
        print_statistics(&report.statistics);
        println!("Saved to {}", report.output_path.display());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("irs_pdf_crawler=info,warn"),
            1 => EnvFilter::new("irs_pdf_crawler=debug,info"),
            2 => EnvFilter::new("irs_pdf_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
