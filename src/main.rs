//! Quillstream main entry point
//!
//! This is the command-line interface for the Quillstream quote scraper.

use anyhow::Context;
use clap::Parser;
use quillstream::config::{load_config, Config};
use quillstream::QuoteExtractor;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quillstream: a paginated quote stream extractor
///
/// Quillstream pulls quotes from a paginated listing site one record at a
/// time and writes them to a JSON-lines file. The run aborts on the first
/// failure; lines written so far are kept.
#[derive(Parser, Debug)]
#[command(name = "quillstream")]
#[command(version = "1.0.0")]
#[command(about = "A paginated quote stream extractor", long_about = None)]
struct Cli {
    /// Number of quotes to scrape (prompts on stdin when omitted)
    #[arg(short = 'n', long, value_name = "COUNT")]
    count: Option<u64>,

    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output file path (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, falling back to defaults without a config file
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    let count = match cli.count {
        Some(count) => count,
        None => prompt_for_count()?,
    };

    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.path));

    let file = std::fs::File::create(&output_path)
        .with_context(|| format!("failed to open output file {}", output_path.display()))?;
    let mut sink = std::io::BufWriter::new(file);

    tracing::info!("Scraping {} quotes to {}", count, output_path.display());

    let mut extractor = QuoteExtractor::new(&config.scraper)
        .await
        .context("quote extractor initialisation failed")?;

    for _ in 0..count {
        extractor.emit_one(&mut sink).await?;
    }

    sink.flush()?;
    tracing::info!("Done: {} quotes written", count);

    Ok(())
}

/// Reads the number of quotes to scrape from stdin
fn prompt_for_count() -> anyhow::Result<u64> {
    print!("Please enter the number of quotes to scrape: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    line.trim()
        .parse::<u64>()
        .context("quote count must be a non-negative integer")
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quillstream=info,warn"),
            1 => EnvFilter::new("quillstream=debug,info"),
            2 => EnvFilter::new("quillstream=trace,debug"),
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
