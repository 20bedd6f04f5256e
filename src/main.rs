//! Command-line entry point for bwl-report
//!
//! Thin wrapper around [`bwl_report::run_report`]: parses the CLI, wires the
//! debug log to `bwl-util.log`, and maps fatal errors to a short stderr
//! message and a nonzero exit. Per-blueprint failures never reach the
//! console; they live in the log and the error report.

use bwl_report::Config;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Append-mode debug log, written next to the report files
const LOG_FILE: &str = "bwl-util.log";

#[derive(Debug, Parser)]
#[command(
    name = "bwl-report",
    version,
    about = "Export a blueprint inventory report from a Blueworks Live library"
)]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn init_logging() -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bwl_report=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn fatal(message: impl std::fmt::Display) -> ! {
    error!(%message, "aborting");
    eprintln!("bwl-report: {}", message);
    eprintln!("bwl-report: aborting.");
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("bwl-report: cannot open {}: {}", LOG_FILE, e);
        std::process::exit(1);
    }

    info!("starting");
    let start = Instant::now();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => fatal(e),
    };

    match bwl_report::run_report(&config, Path::new(".")).await {
        Ok(summary) => {
            println!("Found {} blueprints", summary.listed);
            println!(
                "Exported {} blueprints, {} failures",
                summary.exported, summary.failed
            );
            println!("--- {:.1} seconds ---", start.elapsed().as_secs_f64());
            info!(
                listed = summary.listed,
                exported = summary.exported,
                failed = summary.failed,
                "finished"
            );
        }
        Err(e) => fatal(e),
    }
}
