//! Stacked breach bar chart with legend and translated tooltip.
//!
//! Legend entries are built from `BREACH_SERIES`, so each colour carries
//! the same label as in the tooltip: `#6074DD` (`jobBreach`) reads
//! "Dökme ihlali" and `#59CBEB` (`areaBreach`) reads "Bölge ihlali".

use leptos::prelude::*;

use super::data::{BREACH_SERIES, BreachRow, breach_label};
use super::geometry::{PlotArea, nice_ceiling, stack, ticks};
use super::tooltip::{ChartTooltip, TooltipRow};
use super::{VIEW_WIDTH, format_tick, percent_of_width};

const VIEW_HEIGHT: f64 = 350.0;
const MAX_BAR_WIDTH: f64 = 20.0;

/// Coloured legend entries, one per breach series.
#[component]
pub fn BreachLegend() -> impl IntoView {
    view! {
        <div class="top-info-container">
            {BREACH_SERIES
                .iter()
                .map(|series| {
                    view! {
                        <div class="top-info-container-item">
                            <span
                                class="colored-circle"
                                style=format!("background-color: {};", series.color)
                            ></span>
                            <span>{breach_label(series.key)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Monthly breach counts stacked by series.
#[component]
pub fn StackedBarChart(data: &'static [BreachRow]) -> impl IntoView {
    let area = PlotArea::with_axes(VIEW_WIDTH, VIEW_HEIGHT);
    let max = nice_ceiling(data.iter().map(BreachRow::total).fold(0.0, f64::max));
    let band = area.band_width(data.len());
    let bar_width = (band * 0.6).min(MAX_BAR_WIDTH);
    let hovered = RwSignal::new(None::<usize>);

    let grid = ticks(max, 4)
        .into_iter()
        .map(|tick| {
            let y = format!("{:.1}", area.y(tick, max));
            view! {
                <line
                    class="chart-grid"
                    x1=format!("{:.1}", area.left)
                    x2=format!("{:.1}", area.right())
                    y1=y.clone()
                    y2=y.clone()
                />
                <text class="chart-axis-label" x=format!("{:.1}", area.left - 8.0) y=y text-anchor="end">
                    {format_tick(tick)}
                </text>
            }
        })
        .collect_view();

    let bars = data
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let cx = area.band_center(index, data.len());
            let values: Vec<f64> = BREACH_SERIES.iter().map(|s| row.value(s.key)).collect();
            let segments = stack(&values)
                .into_iter()
                .zip(BREACH_SERIES)
                .map(|((start, end), series)| {
                    let top = area.y(end, max);
                    let bottom = area.y(start, max);
                    view! {
                        <rect
                            x=format!("{:.1}", cx - bar_width / 2.0)
                            y=format!("{top:.1}")
                            width=format!("{bar_width:.1}")
                            height=format!("{:.1}", bottom - top)
                            fill=series.color
                        />
                    }
                })
                .collect_view();

            view! {
                <g
                    class="bar-chart__group"
                    on:mouseenter=move |_| hovered.set(Some(index))
                    on:mouseleave=move |_| hovered.set(None)
                >
                    <rect
                        class="bar-chart__hit"
                        x=format!("{:.1}", cx - band / 2.0)
                        y=format!("{:.1}", area.top)
                        width=format!("{band:.1}")
                        height=format!("{:.1}", area.height)
                        fill="transparent"
                    />
                    {segments}
                    <text
                        class="chart-axis-label"
                        x=format!("{cx:.1}")
                        y=format!("{:.1}", area.bottom() + 18.0)
                        text-anchor="middle"
                    >
                        {row.name}
                    </text>
                </g>
            }
        })
        .collect_view();

    let tooltip = move || {
        let index = hovered.get()?;
        let row = data.get(index)?;
        let rows = BREACH_SERIES
            .iter()
            .map(|series| TooltipRow {
                color: series.color,
                name: breach_label(series.key),
                value: format_tick(row.value(series.key)),
            })
            .collect::<Vec<_>>();
        let left = percent_of_width(area.band_center(index, data.len()));
        Some(view! { <ChartTooltip label=row.name rows=rows left=left/> })
    };

    view! {
        <div class="chart chart--bar">
            <svg class="chart__svg" viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")>
                {grid}
                {bars}
            </svg>
            {tooltip}
        </div>
    }
}
