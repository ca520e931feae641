//! Bar Chart Component
//!
//! SVG rendering of the dashboard's grouped bar chart.

use leptos::prelude::*;

use crate::chart::{layout, SERIES_STYLES};
use crate::models::Series;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;

fn px(value: f64) -> String {
    format!("{:.1}", value)
}

#[component]
pub fn BarChart(series: Series, title: String) -> impl IntoView {
    let chart = layout(&series, WIDTH, HEIGHT);
    let baseline = px(chart.baseline);

    view! {
        <figure class="bar-chart">
            <figcaption class="chart-title">{title}</figcaption>
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) role="img">
                <line class="chart-axis" x1="0" x2=px(WIDTH) y1=baseline.clone() y2=baseline />
                <text class="chart-label" x="2" y="16">{format!("{}", chart.max_value)}</text>
                {chart.bars.into_iter().map(|bar| view! {
                    <rect
                        class="chart-bar"
                        x=px(bar.x)
                        y=px(bar.y)
                        width=px(bar.width)
                        height=px(bar.height)
                        fill=SERIES_STYLES[bar.series].color
                        data-value=bar.value.to_string()
                    />
                }).collect_view()}
                {chart.labels.into_iter().map(|label| view! {
                    <text class="chart-label" x=px(label.x) y=px(HEIGHT - 4.0) text-anchor="middle">
                        {label.text}
                    </text>
                }).collect_view()}
            </svg>
            <ul class="chart-legend">
                {SERIES_STYLES.iter().map(|style| view! {
                    <li>
                        <span class="legend-swatch" style=format!("background-color: {};", style.color)></span>
                        {style.name}
                    </li>
                }).collect_view()}
            </ul>
        </figure>
    }
}
