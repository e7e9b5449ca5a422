//! Sentiment-over-time line chart.

use crate::chart::{
    Axis, ChartConfig, ChartData, ChartKind, ChartOptions, ChartRenderer, Dataset, Scales,
};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const TIMELINE_LABEL: &str = "Sentiment Score";
pub const TIMELINE_COLOR: &str = "#1DA1F2";
pub const TIMELINE_TENSION: f64 = 0.1;

/// Time-of-day format used for x-axis labels, e.g. `3:04:05 PM`.
pub const TIME_OF_DAY_FORMAT: &str = "%-I:%M:%S %p";

/// One reply's compound score (`-1.0..=1.0`) at the time it was posted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub timestamp: DateTime<Utc>,
    pub compound_score: f64,
}

/// Line chart of the points in the given order, labels in local time.
pub fn timeline_chart_config(points: &[TimelinePoint]) -> ChartConfig {
    timeline_chart_config_in(points, &Local)
}

/// Line chart of the points in the given order, labels in `tz`.
///
/// Points are neither sorted nor deduplicated.
pub fn timeline_chart_config_in<Tz>(points: &[TimelinePoint], tz: &Tz) -> ChartConfig
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let labels = points
        .iter()
        .map(|p| {
            p.timestamp
                .with_timezone(tz)
                .format(TIME_OF_DAY_FORMAT)
                .to_string()
        })
        .collect();
    let scores = points.iter().map(|p| p.compound_score).collect();

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: Some(TIMELINE_LABEL.to_string()),
                data: scores,
                border_color: Some(TIMELINE_COLOR.to_string()),
                tension: Some(TIMELINE_TENSION),
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: None,
            scales: Some(Scales {
                y: Axis { begin_at_zero: true },
            }),
        },
    }
}

/// Render the timeline onto `surface`. An absent surface is a no-op.
pub fn initialize_timeline_chart<R: ChartRenderer>(
    renderer: &R,
    surface: Option<&R::Surface>,
    points: &[TimelinePoint],
) {
    let Some(surface) = surface else {
        return;
    };
    renderer.render(surface, &timeline_chart_config(points));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingCharts;
    use chrono::FixedOffset;

    fn point(secs: i64, score: f64) -> TimelinePoint {
        TimelinePoint {
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
            compound_score: score,
        }
    }

    #[test]
    fn preserves_input_order_without_sorting() {
        // Second point is earlier than the first on purpose.
        let points = vec![point(1_700_003_600, 0.5), point(1_700_000_000, -0.2)];
        let config = timeline_chart_config_in(&points, &Utc);

        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(config.data.labels.len(), 2);
        assert_eq!(config.data.datasets[0].data, vec![0.5, -0.2]);
        assert_eq!(config.data.labels, vec!["11:13:20 PM", "10:13:20 PM"]);
    }

    #[test]
    fn labels_use_the_given_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let config = timeline_chart_config_in(&[point(0, 0.0)], &tz);
        assert_eq!(config.data.labels, vec!["2:00:00 AM"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let points = vec![point(60, 0.3), point(60, 0.3)];
        let config = timeline_chart_config_in(&points, &Utc);
        assert_eq!(config.data.datasets[0].data, vec![0.3, 0.3]);
    }

    #[test]
    fn y_axis_starts_at_zero_with_smoothing() {
        let value = serde_json::to_value(timeline_chart_config_in(&[], &Utc)).unwrap();
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(value["data"]["datasets"][0]["tension"], 0.1);
        assert_eq!(value["data"]["datasets"][0]["borderColor"], "#1DA1F2");
        assert_eq!(value["data"]["datasets"][0]["label"], "Sentiment Score");
    }

    #[test]
    fn renders_through_injected_renderer() {
        let charts = RecordingCharts::default();
        let points = vec![point(0, 0.5), point(60, -0.2)];
        initialize_timeline_chart(&charts, Some(&"timelineChart".to_string()), &points);

        let rendered = charts.rendered.borrow();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].1.data.datasets[0].data, vec![0.5, -0.2]);
    }

    #[test]
    fn absent_surface_does_nothing() {
        let charts = RecordingCharts::default();
        initialize_timeline_chart(&charts, None, &[point(0, 0.5)]);
        assert!(charts.rendered.borrow().is_empty());
    }

    #[test]
    fn deserializes_rfc3339_timestamps() {
        let p: TimelinePoint =
            serde_json::from_str(r#"{"timestamp": "2024-03-01T12:30:00Z", "compound_score": 0.42}"#)
                .unwrap();
        assert_eq!(p.timestamp, Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap());
        assert_eq!(p.compound_score, 0.42);
    }
}
