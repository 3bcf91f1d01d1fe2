//! Inline SVG charts for the operator detail screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Charts render static datasets from `data` with the pure math in
//! `geometry`. Each chart keeps its hover index in a local signal and shows
//! a `ChartTooltip` for the hovered category.

pub mod bar;
pub mod data;
pub mod geometry;
pub mod line;
pub mod pie;
pub mod tooltip;

/// Width of every chart's viewBox; height varies per chart.
pub(crate) const VIEW_WIDTH: f64 = 600.0;

/// Axis tick label: integers without a trailing `.0`.
pub(crate) fn format_tick(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Horizontal viewBox position `x` as a percentage of the chart
/// width, used to place the HTML tooltip over the SVG.
pub(crate) fn percent_of_width(x: f64) -> String {
    format!("{:.1}%", x / VIEW_WIDTH * 100.0)
}
