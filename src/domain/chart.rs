// Line chart configuration rendered from the rolling series
use super::series::SeriesBuffer;
use serde::Serialize;

pub const CHART_TITLE: &str = "Top 50 Videos Time vs. Views";
const DATASET_LABEL: &str = "Views";

/// Chart configuration in the shape the frontend charting library consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub title: String,
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub title: String,
    pub reverse: bool,
    pub begin_at_zero: bool,
    pub tick_suffix: String,
    /// Tick labels already formatted for display.
    pub ticks: Vec<String>,
}

pub fn format_x_tick(value: impl std::fmt::Display) -> String {
    format!("{} day(s)", value)
}

pub fn format_y_tick(value: impl std::fmt::Display) -> String {
    format!("{} mill", value)
}

pub fn border_color(color: u8) -> String {
    format!("rgba({}, 100, 100, 1)", color)
}

pub fn background_color(color: u8) -> String {
    format!("rgba({}, 100, 100, 0.1)", color)
}

/// Project the buffer into a chart. Never touches the buffer itself.
pub fn render(buffer: &SeriesBuffer, color: u8) -> ChartSpec {
    let labels = buffer.labels();
    let data = buffer.values();

    // x runs oldest to newest; reversed on screen so the newest sits at 0 days ago
    let x_ticks = (0..labels.len()).rev().map(format_x_tick).collect();
    let y_ticks = data.iter().map(|v| format_y_tick(v)).collect();

    ChartSpec {
        kind: ChartKind::Line,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: DATASET_LABEL.to_string(),
                data,
                border_color: border_color(color),
                background_color: background_color(color),
            }],
        },
        options: ChartOptions {
            responsive: true,
            title: CHART_TITLE.to_string(),
            x: Axis {
                title: "Time".to_string(),
                reverse: true,
                begin_at_zero: false,
                tick_suffix: " day(s)".to_string(),
                ticks: x_ticks,
            },
            y: Axis {
                title: "Views".to_string(),
                reverse: false,
                begin_at_zero: true,
                tick_suffix: " mill".to_string(),
                ticks: y_ticks,
            },
        },
    }
}
