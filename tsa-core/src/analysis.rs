//! Stored thread analyses, as listed on the past-analyses page.

use crate::record::Record;
use crate::sentiment::SentimentSummary;
use crate::timeline::TimelinePoint;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Display format of the analysis date column.
pub const ANALYSIS_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result of analyzing one thread's replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: i64,
    pub tweet_id: String,
    pub original_text: String,
    /// When the analysis ran (UTC).
    pub date: NaiveDateTime,
    pub total_replies: u32,
    /// Share of positive replies, in percent.
    pub with_pct: f64,
    /// Share of negative replies, in percent.
    pub against_pct: f64,
    pub neutral_pct: f64,
    /// Share of replies from likely bot accounts, in percent.
    pub bot_pct: f64,
    #[serde(default)]
    pub response_text: Option<String>,
    /// Per-reply scores in reply order.
    #[serde(default)]
    pub sentiment_progression: Vec<TimelinePoint>,
}

impl Analysis {
    /// The export row for this analysis.
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("ID", self.id)
            .with("Tweet ID", self.tweet_id.as_str())
            .with("Date", self.date.format(ANALYSIS_DATE_FORMAT).to_string())
            .with("Replies", self.total_replies)
            .with("Positive %", round1(self.with_pct))
            .with("Negative %", round1(self.against_pct))
            .with("Neutral %", round1(self.neutral_pct))
            .with("Bot %", round1(self.bot_pct))
    }

    /// Reply counts per sentiment.
    ///
    /// Taken from the per-reply scores when present, otherwise estimated
    /// from the stored percentages.
    pub fn sentiment_summary(&self) -> SentimentSummary {
        if !self.sentiment_progression.is_empty() {
            return SentimentSummary::from_points(&self.sentiment_progression);
        }
        let count = |pct: f64| (pct * f64::from(self.total_replies) / 100.0).round().max(0.0) as u64;
        SentimentSummary {
            positive: count(self.with_pct),
            negative: count(self.against_pct),
            neutral: count(self.neutral_pct),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean sentiment split across analyses, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageSentiment {
    pub with: f64,
    pub against: f64,
    pub neutral: f64,
}

/// Aggregate figures over every stored analysis.
///
/// Averages are rounded to two decimals. An empty list yields all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total_analyses: usize,
    pub average_sentiment: AverageSentiment,
    pub average_bot_percentage: f64,
}

impl AnalysisStats {
    pub fn from_analyses(analyses: &[Analysis]) -> Self {
        if analyses.is_empty() {
            return Self::default();
        }
        let count = analyses.len() as f64;
        let mean = |field: fn(&Analysis) -> f64| {
            round2(analyses.iter().map(field).sum::<f64>() / count)
        };
        Self {
            total_analyses: analyses.len(),
            average_sentiment: AverageSentiment {
                with: mean(|a| a.with_pct),
                against: mean(|a| a.against_pct),
                neutral: mean(|a| a.neutral_pct),
            },
            average_bot_percentage: mean(|a| a.bot_pct),
        }
    }
}

/// Export rows for a list of analyses, in list order.
pub fn analyses_to_records(analyses: &[Analysis]) -> Vec<Record> {
    analyses.iter().map(Analysis::to_record).collect()
}
