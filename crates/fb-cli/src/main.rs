use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fb_cli::{Cli, input};
use fb_core::{TracingSink, UserBilling, process_log};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support. Diagnostics go to
    // stderr; stdout carries only the billing report.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if cli.file.len() > 1 {
        tracing::debug!(
            ignored = cli.file.len() - 1,
            "multiple paths given, using the last"
        );
    }
    let path = cli.file.last().context("missing log file argument")?;

    let lines = input::read_log(path)?;

    let mut sink = TracingSink;
    let results = process_log(&lines, &mut sink).context("failed to process log")?;

    render(&results, cli.json)
}

fn render(results: &[UserBilling], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        for result in results {
            println!(
                "{} {} {}",
                result.user_id, result.session_count, result.billable_seconds
            );
        }
    }
    Ok(())
}
