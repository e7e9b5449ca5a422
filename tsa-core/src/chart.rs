//! Chart.js configuration objects.
//!
//! These serialize to the `{type, data: {labels, datasets}, options}` shape
//! Chart.js expects, with camelCase keys.

use serde::Serialize;

/// Draws a chart configuration onto a rendering surface.
///
/// In the browser the surface is a canvas and the renderer is Chart.js.
pub trait ChartRenderer {
    type Surface;

    fn render(&self, surface: &Self::Surface, config: &ChartConfig);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Bezier smoothing of line segments; 0 draws straight lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: LegendPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}
