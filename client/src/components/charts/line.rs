//! Line chart over daily values.

use leptos::prelude::*;

use super::data::NamedValue;
use super::geometry::{PlotArea, line_path, nice_ceiling, point_marker, ticks};
use super::tooltip::{ChartTooltip, TooltipRow};
use super::{VIEW_WIDTH, format_tick, percent_of_width};

/// Line chart with category x axis and a `0..max` value axis.
///
/// With `highlight_points`, markers follow the threshold policy from
/// [`point_marker`]; otherwise every point gets a small ring in the
/// stroke colour.
#[component]
pub fn LineChart(
    data: &'static [NamedValue],
    stroke: &'static str,
    #[prop(default = 3.0)] stroke_width: f64,
    /// Suffix for y-axis labels and tooltip values, e.g. `" Km"`.
    unit: &'static str,
    #[prop(default = 300.0)] height: f64,
    #[prop(optional)] highlight_points: bool,
    #[prop(optional)] dashed_grid: bool,
) -> impl IntoView {
    let area = PlotArea::with_axes(VIEW_WIDTH, height);
    let max = nice_ceiling(data.iter().map(|p| p.value).fold(0.0, f64::max));
    let hovered = RwSignal::new(None::<usize>);

    let points: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .map(|(i, p)| (area.band_center(i, data.len()), area.y(p.value, max)))
        .collect();

    let grid = ticks(max, 4)
        .into_iter()
        .map(|tick| {
            let y = format!("{:.1}", area.y(tick, max));
            let grid_line = dashed_grid.then(|| {
                view! {
                    <line
                        class="chart-grid chart-grid--dashed"
                        x1=format!("{:.1}", area.left)
                        x2=format!("{:.1}", area.right())
                        y1=y.clone()
                        y2=y.clone()
                        stroke-dasharray="3 3"
                    />
                }
            });
            view! {
                {grid_line}
                <text class="chart-axis-label" x=format!("{:.1}", area.left - 8.0) y=y text-anchor="end">
                    {format!("{}{unit}", format_tick(tick))}
                </text>
            }
        })
        .collect_view();

    let labels = data
        .iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <text
                    class="chart-axis-label"
                    x=format!("{:.1}", area.band_center(i, data.len()))
                    y=format!("{:.1}", area.bottom() + 18.0)
                    text-anchor="middle"
                >
                    {p.name}
                </text>
            }
        })
        .collect_view();

    let band = area.band_width(data.len());
    let markers = points
        .iter()
        .zip(data)
        .enumerate()
        .map(|(i, (&(x, y), p))| {
            let (radius, fill, ring) = if highlight_points {
                let marker = point_marker(p.value);
                (marker.radius, marker.fill, "none")
            } else {
                (3.0, "#FFFFFF", stroke)
            };
            view! {
                <g on:mouseenter=move |_| hovered.set(Some(i)) on:mouseleave=move |_| hovered.set(None)>
                    <rect
                        x=format!("{:.1}", x - band / 2.0)
                        y=format!("{:.1}", area.top)
                        width=format!("{band:.1}")
                        height=format!("{:.1}", area.height)
                        fill="transparent"
                    />
                    <circle
                        cx=format!("{x:.1}")
                        cy=format!("{y:.1}")
                        r=format!("{radius:.0}")
                        fill=fill
                        stroke=ring
                        stroke-width="2"
                    />
                </g>
            }
        })
        .collect_view();

    let tooltip = move || {
        let index = hovered.get()?;
        let point = data.get(index)?;
        let rows = vec![TooltipRow { color: stroke, name: "Değer", value: format!("{}{unit}", format_tick(point.value)) }];
        let left = percent_of_width(area.band_center(index, data.len()));
        Some(view! { <ChartTooltip label=point.name rows=rows left=left/> })
    };

    view! {
        <div class="chart chart--line">
            <svg class="chart__svg" viewBox=format!("0 0 {VIEW_WIDTH} {height}")>
                {grid}
                {labels}
                <path
                    d=line_path(&points)
                    fill="none"
                    stroke=stroke
                    stroke-width=format!("{stroke_width}")
                    stroke-linejoin="round"
                />
                {markers}
            </svg>
            {tooltip}
        </div>
    }
}
