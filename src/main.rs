//! Fairway-Scout main entry point
//!
//! Command-line interface for the ffgolf course-guide scraper.

use anyhow::Context;
use clap::Parser;
use fairway_scout::config::{CrawlConfig, CrawlLimits, DEFAULT_DELAY_SECS, DEFAULT_OUTPUT};
use fairway_scout::crawler::crawl;
use fairway_scout::output::write_workbook;
use std::collections::HashSet;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Fairway-Scout: scrape the ffgolf course guide into a spreadsheet
///
/// Crawls the French golf federation's public course directory, region by
/// region, and exports every course's contact details to an XLSX workbook.
/// Without a mode flag it runs a bounded test crawl (2 regions, 5 courses
/// per region); use --all for a full crawl.
#[derive(Parser, Debug)]
#[command(name = "fairway-scout")]
#[command(version)]
#[command(about = "Scrape the ffgolf course guide into a spreadsheet", long_about = None)]
struct Cli {
    /// Bounded test crawl: 2 regions, 5 courses per region (the default)
    #[arg(long, conflicts_with_all = ["all", "max_regions", "max_golfs"])]
    test: bool,

    /// Crawl every region and every course
    #[arg(long)]
    all: bool,

    /// Maximum number of regions to crawl
    #[arg(long, value_name = "N", conflicts_with = "all")]
    max_regions: Option<usize>,

    /// Maximum number of courses per region to crawl
    #[arg(long, value_name = "N", conflicts_with = "all")]
    max_golfs: Option<usize>,

    /// Delay between requests, in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_DELAY_SECS)]
    delay: f64,

    /// Output workbook path
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let limits = CrawlLimits::resolve(cli.all, cli.max_regions, cli.max_golfs, cli.delay);
    print_mode_banner(&cli, &limits);

    let config = CrawlConfig::new(
        "https://www.ffgolf.org",
        limits,
        cli.output.clone(),
    );

    let records = crawl(config).await.context("crawl failed")?;

    write_workbook(&records, Path::new(&cli.output)).context("failed to save workbook")?;

    if records.is_empty() {
        println!("No data to save.");
    } else {
        let regions_covered: HashSet<&str> =
            records.iter().map(|r| r.region_name.as_str()).collect();
        println!("Saved {} courses to {}", records.len(), cli.output);
        println!("Regions covered: {}", regions_covered.len());
    }

    println!("Done.");
    if !cli.all && cli.max_regions.is_none() && cli.max_golfs.is_none() {
        println!("Test mode was active; use --all to scrape everything.");
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fairway_scout=info,warn"),
            1 => EnvFilter::new("fairway_scout=debug,info"),
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

/// Prints which mode the run is in and its effective limits
fn print_mode_banner(cli: &Cli, limits: &CrawlLimits) {
    if limits.is_unbounded() {
        println!("Mode: full crawl (all regions, all courses)");
    } else if cli.max_regions.is_some() || cli.max_golfs.is_some() {
        println!("Mode: custom limits");
        match limits.max_regions {
            Some(n) => println!("  - at most {} region(s)", n),
            None => println!("  - all regions"),
        }
        match limits.max_courses_per_region {
            Some(n) => println!("  - at most {} course(s) per region", n),
            None => println!("  - all courses per region"),
        }
    } else {
        println!("Mode: test (default; use --all for a full crawl)");
        println!("  - at most 2 regions, 5 courses per region");
    }
    println!("Delay between requests: {}s", cli.delay);
    println!("Output file: {}", cli.output);
}
