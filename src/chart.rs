//! Grouped Bar Chart Layout
//!
//! Geometry for the dashboard chart: one group per day, one bar per series.

use crate::models::Series;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub name: &'static str,
    pub color: &'static str,
}

pub const SERIES_STYLES: [SeriesStyle; 3] = [
    SeriesStyle { name: "Alocados", color: "#4f46e5" },
    SeriesStyle { name: "Vagos", color: "#ef4444" },
    SeriesStyle { name: "Substituições", color: "#f59e0b" },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub series: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupLabel {
    pub text: String,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Bottom edge of the plot area
    pub baseline: f64,
    pub max_value: f64,
    pub bars: Vec<Bar>,
    pub labels: Vec<GroupLabel>,
}

const PADDING: f64 = 24.0;
const LABEL_SPACE: f64 = 20.0;
const GROUP_GAP: f64 = 0.25;

/// Lays out every day in `series.days`; a series shorter than `days` is
/// padded with zeros.
pub fn layout(series: &Series, width: f64, height: f64) -> ChartLayout {
    let values = [&series.allocated, &series.vacant, &series.substitutions];
    let days = series.days.len();
    let baseline = height - LABEL_SPACE;
    let plot_height = (baseline - PADDING).max(0.0);

    let value_at = |s: usize, day: usize| values[s].get(day).copied().unwrap_or(0.0).max(0.0);
    let max_value = (0..days)
        .flat_map(|d| (0..values.len()).map(move |s| (s, d)))
        .map(|(s, d)| value_at(s, d))
        .fold(0.0_f64, f64::max);

    let group_width = if days == 0 { 0.0 } else { (width - 2.0 * PADDING) / days as f64 };
    let bar_width = group_width * (1.0 - GROUP_GAP) / values.len() as f64;

    let mut bars = Vec::with_capacity(days * values.len());
    let mut labels = Vec::with_capacity(days);
    for (day, name) in series.days.iter().enumerate() {
        let group_x = PADDING + group_width * day as f64 + group_width * GROUP_GAP / 2.0;
        for s in 0..values.len() {
            let value = value_at(s, day);
            let bar_height = if max_value > 0.0 { value / max_value * plot_height } else { 0.0 };
            bars.push(Bar {
                series: s,
                value,
                x: group_x + bar_width * s as f64,
                y: baseline - bar_height,
                width: bar_width,
                height: bar_height,
            });
        }
        labels.push(GroupLabel {
            text: name.clone(),
            x: PADDING + group_width * (day as f64 + 0.5),
        });
    }

    ChartLayout { baseline, max_value, bars, labels }
}
