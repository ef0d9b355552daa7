//! Gleaner main entry point
//!
//! This is the command-line shell for the Gleaner single-page scraper.

use anyhow::Context;
use clap::{Parser, Subcommand};
use gleaner::config::load_or_default;
use gleaner::output::{export_csv, format_result, format_summary, write_json, Tabular};
use gleaner::{ExtractionResult, GleanError, Pipeline};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/Main_Page";

/// Gleaner: a polite single-page scraper
///
/// Every command checks robots.txt for the target URL before fetching it.
#[derive(Parser, Debug)]
#[command(name = "gleaner")]
#[command(version)]
#[command(about = "A polite single-page scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Page to scrape
    #[arg(long, default_value = DEFAULT_URL, global = true)]
    url: String,

    /// Also write the result as CSV to this path
    #[arg(long, value_name = "PATH", global = true)]
    csv: Option<PathBuf>,

    /// Also write the result as JSON to this path
    #[arg(long, value_name = "PATH", global = true)]
    json: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether robots.txt allows scraping the URL
    Check,

    /// Extract headlines, links and images
    Extract,

    /// Extract links only
    Links,

    /// Find body text containing a keyword (case-insensitive)
    Search {
        /// Keyword to look for; empty matches every text node
        #[arg(default_value = "")]
        keyword: String,
    },

    /// Select elements with a CSS selector
    Select {
        /// CSS selector, e.g. "div.mw-parser-output > p"
        selector: String,
    },

    /// Count elements with a tag name
    Count {
        /// Tag name (case-insensitive)
        #[arg(default_value = "p")]
        tag: String,
    },

    /// List /wiki links of the page
    Follow {
        /// Link depth; negative returns nothing, anything else stays on one page
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        depth: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    let pipeline = Pipeline::new(&config).context("Failed to build HTTP client")?;

    match run(&cli, &pipeline).await {
        Err(GleanError::RobotsDenied { url }) => {
            Err(anyhow::anyhow!("Not allowed to scrape {}", url))
        }
        result => Ok(result?),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gleaner=info,warn"),
            1 => EnvFilter::new("gleaner=debug,info"),
            2 => EnvFilter::new("gleaner=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Runs one command against the pipeline
async fn run(cli: &Cli, pipeline: &Pipeline) -> Result<(), GleanError> {
    let url = cli.url.as_str();

    match &cli.command {
        Command::Check => {
            let decision = pipeline.check(url).await?;
            if decision.allowed {
                println!("Allowed to scrape {}", url);
            } else {
                println!("Not allowed to scrape {} (see {})", url, decision.robots_url);
            }
        }
        Command::Extract => {
            let summary = pipeline.extract_all(url).await?;
            println!("{}", format_summary(&summary));
            export(cli, &summary)?;
        }
        Command::Links => {
            let result = pipeline.extract_links(url).await?;
            show(cli, "Links", &result)?;
        }
        Command::Search { keyword } => {
            let result = pipeline.search_text(url, keyword).await?;
            show(cli, &format!("Occurrences of '{}'", keyword), &result)?;
        }
        Command::Select { selector } => {
            let result = pipeline.select(url, selector).await?;
            show(cli, &format!("Elements matching '{}'", selector), &result)?;
        }
        Command::Count { tag } => {
            let result = pipeline.count_elements(url, tag).await?;
            show(cli, &format!("Number of '{}' elements", tag), &result)?;
        }
        Command::Follow { depth } => {
            let result = pipeline.follow_links(url, *depth).await?;
            show(cli, "Followed Links", &result)?;
        }
    }

    Ok(())
}

/// Prints a result and exports it when requested
fn show(cli: &Cli, title: &str, result: &ExtractionResult) -> Result<(), GleanError> {
    println!("{}", format_result(title, result));
    export(cli, result)
}

/// Writes `value` to the `--csv` and `--json` destinations, if given
fn export<T: Tabular + Serialize>(cli: &Cli, value: &T) -> Result<(), GleanError> {
    if let Some(path) = &cli.csv {
        export_csv(value, path)?;
        tracing::info!("Wrote CSV to {}", path.display());
    }

    if let Some(path) = &cli.json {
        write_json(value, path)?;
        tracing::info!("Wrote JSON to {}", path.display());
    }

    Ok(())
}
