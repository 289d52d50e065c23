//! Linkrot main entry point
//!
//! This is the command-line interface for the linkrot dead-link crawler.

use clap::Parser;
use linkrot::crawler::crawl;
use linkrot::output::{build_report, print_report, render_json};
use tracing_subscriber::EnvFilter;

/// Linkrot: a same-origin dead-link crawler
///
/// Linkrot crawls every page sharing the seed URL's origin, checks every
/// link it observes along the way (in-domain or not), and reports the ones
/// that are dead.
#[derive(Parser, Debug)]
#[command(name = "linkrot")]
#[command(version = "0.1.0")]
#[command(about = "Find dead links on a website", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "URL")]
    seed: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Emit the final report as JSON instead of the colored rendering
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    // Exit codes: 0 = clean crawl, 1 = dead links found, 2 = startup error.
    // Clap's own usage errors (missing URL) also exit with 2.
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Seed validation happens inside crawl(), before any network work.
    let summary = crawl(&cli.seed).await?;
    let report = build_report(&summary.records, summary.elapsed);

    if cli.json {
        println!("{}", render_json(&report)?);
    } else {
        print_report(&report);
    }

    if report.dead_links.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkrot=info,warn"),
            1 => EnvFilter::new("linkrot=debug,info"),
            2 => EnvFilter::new("linkrot=trace,debug"),
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
