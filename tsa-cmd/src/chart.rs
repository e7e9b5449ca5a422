//! Chart configuration command.

use crate::input::read_analyses;
use anyhow::Context;
use chrono::Utc;
use clap::ValueEnum;
use std::path::Path;
use tsa_core::chart::ChartConfig;
use tsa_core::sentiment::sentiment_chart_config;
use tsa_core::timeline::{timeline_chart_config, timeline_chart_config_in};
use tsa_core::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKindArg {
    /// Doughnut of positive/negative/neutral replies
    Sentiment,
    /// Line of compound scores in reply order
    Timeline,
}

/// Build the configuration the dashboard would hand to Chart.js.
pub fn chart_config_for(analysis: &Analysis, kind: ChartKindArg, utc: bool) -> ChartConfig {
    match kind {
        ChartKindArg::Sentiment => sentiment_chart_config(&analysis.sentiment_summary()),
        ChartKindArg::Timeline if utc => {
            timeline_chart_config_in(&analysis.sentiment_progression, &Utc)
        }
        ChartKindArg::Timeline => timeline_chart_config(&analysis.sentiment_progression),
    }
}

/// Pick the analysis with `id`, or the first one when no id is given.
pub fn select_analysis(analyses: &[Analysis], id: Option<i64>) -> anyhow::Result<&Analysis> {
    match id {
        Some(id) => analyses
            .iter()
            .find(|a| a.id == id)
            .with_context(|| format!("No analysis with id {}", id)),
        None => analyses.first().context("Input contains no analyses"),
    }
}

pub fn run_chart_config(
    input: &Path,
    kind: ChartKindArg,
    analysis_id: Option<i64>,
    utc: bool,
) -> anyhow::Result<()> {
    let analyses = read_analyses(input)?;
    let analysis = select_analysis(&analyses, analysis_id)?;
    let config = chart_config_for(analysis, kind, utc);
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
