//! Pure plotting math for the inline SVG charts.
//!
//! Coordinates are in SVG user units inside a fixed `viewBox`; the charts
//! scale to their container through CSS.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::{FRAC_PI_2, TAU};

/// Line-chart values above this get the highlighted marker.
pub const POINT_HIGHLIGHT_THRESHOLD: f64 = 100.0;

/// Marker drawn at a line-chart data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMarker {
    pub radius: f64,
    pub fill: &'static str,
}

/// Marker policy for the speed chart: values over the threshold stand out.
#[must_use]
pub fn point_marker(value: f64) -> PointMarker {
    if value > POINT_HIGHLIGHT_THRESHOLD {
        PointMarker { radius: 7.0, fill: "red" }
    } else {
        PointMarker { radius: 5.0, fill: "#66E8E2" }
    }
}

/// Round an axis maximum up to 1, 2, 5 or 10 times a power of ten.
#[must_use]
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s + f64::EPSILON)
        .unwrap_or(10.0);
    step * magnitude
}

/// Evenly spaced tick values from 0 to `max` inclusive.
#[must_use]
pub fn ticks(max: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    #[allow(clippy::cast_precision_loss)]
    (0..=intervals).map(|i| max * i as f64 / intervals as f64).collect()
}

/// Plot rectangle inside a chart's viewBox.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Plot area for a `view_width` x `view_height` viewBox with room for
    /// y-axis labels on the left and x-axis labels below.
    #[must_use]
    pub fn with_axes(view_width: f64, view_height: f64) -> Self {
        Self { left: 48.0, top: 12.0, width: view_width - 48.0 - 12.0, height: view_height - 12.0 - 28.0 }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Y coordinate of `value` on a `0..=max` axis, clamped to the plot.
    #[must_use]
    pub fn y(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.bottom();
        }
        let ratio = (value / max).clamp(0.0, 1.0);
        self.bottom() - ratio * self.height
    }

    /// Center x of category `index` out of `count` equal bands.
    #[must_use]
    pub fn band_center(&self, index: usize, count: usize) -> f64 {
        let band = self.band_width(count);
        #[allow(clippy::cast_precision_loss)]
        let offset = band * index as f64;
        self.left + offset + band / 2.0
    }

    #[must_use]
    pub fn band_width(&self, count: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let count = count.max(1) as f64;
        self.width / count
    }
}

/// Cumulative `(start, end)` extents of stacked segments, bottom first.
#[must_use]
pub fn stack(values: &[f64]) -> Vec<(f64, f64)> {
    let mut base = 0.0;
    values
        .iter()
        .map(|v| {
            let start = base;
            base += v.max(0.0);
            (start, base)
        })
        .collect()
}

/// SVG path through the given points (straight segments).
#[must_use]
pub fn line_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{}{x:.1},{y:.1}", if i == 0 { "M" } else { "L" }))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Angular `(start, end)` ranges in radians for pie slices, clockwise from
/// 12 o'clock. Non-positive values get an empty slice.
#[must_use]
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut angle = -FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            let sweep = if total > 0.0 { v.max(0.0) / total * TAU } else { 0.0 };
            let start = angle;
            angle += sweep;
            (start, angle)
        })
        .collect()
}

/// SVG path for an annular sector (a pie wedge when `inner` is zero).
#[must_use]
pub fn arc_path(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> String {
    // A single arc command cannot draw a full circle.
    let end = if end - start >= TAU { start + TAU - 1e-4 } else { end };
    let large_arc = u8::from(end - start > std::f64::consts::PI);
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);

    if inner <= 0.0 {
        return format!(
            "M{cx:.2},{cy:.2} L{ox0:.2},{oy0:.2} A{outer:.2},{outer:.2} 0 {large_arc} 1 {ox1:.2},{oy1:.2} Z"
        );
    }

    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);
    format!(
        "M{ox0:.2},{oy0:.2} A{outer:.2},{outer:.2} 0 {large_arc} 1 {ox1:.2},{oy1:.2} \
         L{ix1:.2},{iy1:.2} A{inner:.2},{inner:.2} 0 {large_arc} 0 {ix0:.2},{iy0:.2} Z"
    )
}

/// Point at `radius` and `angle` (radians) around `(cx, cy)`.
#[must_use]
pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}
