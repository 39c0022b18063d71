//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Fair billing report generator.
///
/// Reads a session-activity log of `HH:MM:SS <userId> <Action>` lines and
/// prints one `<userId> <sessionCount> <billableSeconds>` line per user,
/// in order of first appearance.
#[derive(Debug, Parser)]
#[command(name = "fairbill", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Path to the log file. When several paths are given, only the last
    /// one is read.
    #[arg(required = true, num_args = 1.., value_name = "FILE")]
    pub file: Vec<PathBuf>,
}
