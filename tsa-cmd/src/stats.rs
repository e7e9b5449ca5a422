//! Aggregate statistics command.

use crate::input::read_analyses;
use log::info;
use std::path::Path;
use tsa_core::AnalysisStats;

/// Print the aggregate stats of every analysis in `input`.
pub fn run_stats(input: &Path) -> anyhow::Result<()> {
    let analyses = read_analyses(input)?;
    let stats = AnalysisStats::from_analyses(&analyses);
    info!("Summarized {} analyses from {}", stats.total_analyses, input.display());
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_input(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tsa-stats-{}-{}.json", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn empty_list_reports_zeros() {
        let path = write_input("empty", "[]");
        let analyses = read_analyses(&path).unwrap();
        assert_eq!(AnalysisStats::from_analyses(&analyses), AnalysisStats::default());
        assert!(run_stats(&path).is_ok());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn averages_over_file_contents() {
        let path = write_input(
            "two",
            r#"[
            {"id": 1, "tweet_id": "1", "original_text": "a", "date": "2024-03-02T18:41:09",
             "total_replies": 2, "with_pct": 50.0, "against_pct": 25.0, "neutral_pct": 25.0, "bot_pct": 10.0},
            {"id": 2, "tweet_id": "2", "original_text": "b", "date": "2024-03-01T09:12:44",
             "total_replies": 10, "with_pct": 30.0, "against_pct": 10.0, "neutral_pct": 60.0, "bot_pct": 0.0}
        ]"#,
        );
        let stats = AnalysisStats::from_analyses(&read_analyses(&path).unwrap());
        assert_eq!(stats.total_analyses, 2);
        assert_eq!(stats.average_sentiment.with, 40.0);
        assert_eq!(stats.average_sentiment.against, 17.5);
        assert_eq!(stats.average_sentiment.neutral, 42.5);
        assert_eq!(stats.average_bot_percentage, 5.0);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("tsa-stats-does-not-exist.json");
        assert!(run_stats(&path).is_err());
    }
}
