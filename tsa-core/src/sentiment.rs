//! Sentiment summaries and the doughnut chart built from them.

use crate::chart::{
    ChartConfig, ChartData, ChartKind, ChartOptions, ChartRenderer, Dataset, Legend,
    LegendPosition, Plugins,
};
use crate::timeline::TimelinePoint;
use serde::{Deserialize, Serialize};

/// Slice labels, in dataset order.
pub const SENTIMENT_LABELS: [&str; 3] = ["Positive", "Negative", "Neutral"];

/// Slice colors, in dataset order (green, red, grey).
pub const SENTIMENT_COLORS: [&str; 3] = ["#28a745", "#dc3545", "#6c757d"];

/// Counts of positive, negative and neutral replies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

impl SentimentSummary {
    /// Tally compound scores into the three chart buckets.
    pub fn from_points(points: &[TimelinePoint]) -> Self {
        points.iter().fold(Self::default(), |mut summary, point| {
            match SentimentCategory::from_compound(point.compound_score) {
                SentimentCategory::StronglyPositive | SentimentCategory::Positive => {
                    summary.positive += 1
                }
                SentimentCategory::StronglyNegative | SentimentCategory::Negative => {
                    summary.negative += 1
                }
                SentimentCategory::Neutral => summary.neutral += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }
}

/// Five-way classification of a VADER compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    StronglyPositive,
    Positive,
    Neutral,
    Negative,
    StronglyNegative,
}

impl SentimentCategory {
    pub fn from_compound(score: f64) -> Self {
        if score >= 0.5 {
            SentimentCategory::StronglyPositive
        } else if score >= 0.1 {
            SentimentCategory::Positive
        } else if score > -0.1 {
            SentimentCategory::Neutral
        } else if score >= -0.5 && score < -0.1 {
            SentimentCategory::Negative
        } else {
            SentimentCategory::StronglyNegative
        }
    }
}

/// Doughnut chart with one slice per category, legend below.
pub fn sentiment_chart_config(summary: &SentimentSummary) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: SENTIMENT_LABELS.iter().map(|s| s.to_string()).collect(),
            datasets: vec![Dataset {
                data: vec![
                    summary.positive as f64,
                    summary.negative as f64,
                    summary.neutral as f64,
                ],
                background_color: Some(SENTIMENT_COLORS.iter().map(|s| s.to_string()).collect()),
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: Some(Plugins {
                legend: Legend {
                    position: LegendPosition::Bottom,
                },
            }),
            scales: None,
        },
    }
}

/// Render the doughnut chart onto `surface`. An absent surface is a no-op.
pub fn initialize_sentiment_chart<R: ChartRenderer>(
    renderer: &R,
    surface: Option<&R::Surface>,
    summary: &SentimentSummary,
) {
    let Some(surface) = surface else {
        return;
    };
    renderer.render(surface, &sentiment_chart_config(summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingCharts;
    use chrono::{TimeZone, Utc};

    #[test]
    fn dataset_follows_fixed_category_order() {
        // Keys deliberately out of order.
        let summary: SentimentSummary =
            serde_json::from_str(r#"{"neutral": 2, "negative": 1, "positive": 3}"#).unwrap();
        let config = sentiment_chart_config(&summary);

        assert_eq!(config.kind, ChartKind::Doughnut);
        assert_eq!(config.data.labels, vec!["Positive", "Negative", "Neutral"]);
        assert_eq!(config.data.datasets.len(), 1);
        assert_eq!(config.data.datasets[0].data, vec![3.0, 1.0, 2.0]);
        assert_eq!(
            config.data.datasets[0].background_color.as_deref(),
            Some(&["#28a745".to_string(), "#dc3545".into(), "#6c757d".into()][..])
        );
    }

    #[test]
    fn legend_sits_below_the_chart() {
        let value = serde_json::to_value(sentiment_chart_config(&SentimentSummary::default())).unwrap();
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "bottom");
        assert_eq!(value["options"]["responsive"], true);
    }

    #[test]
    fn renders_once_onto_present_surface() {
        let charts = RecordingCharts::default();
        let summary = SentimentSummary { positive: 3, negative: 1, neutral: 2 };
        initialize_sentiment_chart(&charts, Some(&"sentimentChart".to_string()), &summary);

        let rendered = charts.rendered.borrow();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].0, "sentimentChart");
        assert_eq!(rendered[0].1.data.datasets[0].data, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn absent_surface_does_nothing() {
        let charts = RecordingCharts::default();
        initialize_sentiment_chart(&charts, None, &SentimentSummary::default());
        assert!(charts.rendered.borrow().is_empty());
    }

    #[test]
    fn compound_score_thresholds() {
        assert_eq!(SentimentCategory::from_compound(0.5), SentimentCategory::StronglyPositive);
        assert_eq!(SentimentCategory::from_compound(0.1), SentimentCategory::Positive);
        assert_eq!(SentimentCategory::from_compound(0.09), SentimentCategory::Neutral);
        assert_eq!(SentimentCategory::from_compound(-0.09), SentimentCategory::Neutral);
        // -0.1 is neither neutral nor inside the half-open negative band.
        assert_eq!(SentimentCategory::from_compound(-0.1), SentimentCategory::StronglyNegative);
        assert_eq!(SentimentCategory::from_compound(-0.2), SentimentCategory::Negative);
        assert_eq!(SentimentCategory::from_compound(-0.5), SentimentCategory::Negative);
        assert_eq!(SentimentCategory::from_compound(-0.51), SentimentCategory::StronglyNegative);
    }

    #[test]
    fn summary_from_points_merges_strong_buckets() {
        let at = |s| Utc.timestamp_opt(s, 0).unwrap();
        let points = vec![
            TimelinePoint { timestamp: at(0), compound_score: 0.9 },
            TimelinePoint { timestamp: at(1), compound_score: 0.2 },
            TimelinePoint { timestamp: at(2), compound_score: 0.0 },
            TimelinePoint { timestamp: at(3), compound_score: -0.7 },
        ];
        let summary = SentimentSummary::from_points(&points);
        assert_eq!(summary, SentimentSummary { positive: 2, negative: 1, neutral: 1 });
        assert_eq!(summary.total(), 4);
    }
}
