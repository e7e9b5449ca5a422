//! Command implementations for the TSA CLI.
//!
//! Provides subcommands that run the dashboard's CSV exporter, chart
//! builders and summary statistics outside the browser.

use clap::Subcommand;
use std::path::PathBuf;

pub mod chart;
pub mod export;
pub mod input;
pub mod stats;

pub use chart::ChartKindArg;

#[derive(Subcommand)]
pub enum Command {
    /// Write analyses or records to a CSV file, as the dashboard download would
    Export {
        /// Input file: JSON list of analyses or records, or a CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the CSV file (used verbatim)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the `data:` URI the dashboard hands to its download link
    DataUri {
        /// Input file: JSON list of analyses or records, or a CSV file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the Chart.js configuration for one analysis
    ChartConfig {
        /// JSON list of analyses
        #[arg(short, long)]
        input: PathBuf,

        /// Which chart to build
        #[arg(short, long, value_enum)]
        kind: ChartKindArg,

        /// Analysis id (defaults to the first analysis in the file)
        #[arg(short, long)]
        analysis: Option<i64>,

        /// Format timeline labels in UTC instead of local time
        #[arg(long)]
        utc: bool,
    },

    /// Print totals and average sentiment across all analyses as JSON
    Stats {
        /// JSON list of analyses
        #[arg(short, long)]
        input: PathBuf,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Export { input, output } => export::run_export(&input, &output),
        Command::DataUri { input } => export::run_data_uri(&input),
        Command::ChartConfig {
            input,
            kind,
            analysis,
            utc,
        } => chart::run_chart_config(&input, kind, analysis, utc),
        Command::Stats { input } => stats::run_stats(&input),
    }
}
