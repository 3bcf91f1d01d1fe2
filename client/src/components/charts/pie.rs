//! Pie and doughnut charts.

use leptos::prelude::*;

use super::data::{NamedValue, cycle_color};
use super::geometry::{arc_path, polar, slice_angles};
use super::tooltip::{ChartTooltip, TooltipRow};
use super::format_tick;

const VIEW_SIZE: f64 = 300.0;

/// Pie chart; a non-zero `inner_radius` turns it into a doughnut.
#[component]
pub fn PieChart(
    data: &'static [NamedValue],
    colors: &'static [&'static str],
    #[prop(default = 120.0)] outer_radius: f64,
    #[prop(optional)] inner_radius: f64,
) -> impl IntoView {
    let center = VIEW_SIZE / 2.0;
    let hovered = RwSignal::new(None::<usize>);
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let angles = slice_angles(&values);

    let slices = angles
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| {
            view! {
                <path
                    class="pie-chart__slice"
                    d=arc_path(center, center, inner_radius, outer_radius, start, end)
                    fill=cycle_color(colors, i)
                    stroke="#FFFFFF"
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    let tooltip = move || {
        let index = hovered.get()?;
        let slice = data.get(index)?;
        let (start, end) = *angles.get(index)?;
        let (x, _) = polar(center, center, outer_radius, f64::midpoint(start, end));
        let rows = vec![TooltipRow {
            color: cycle_color(colors, index),
            name: slice.name,
            value: format_tick(slice.value),
        }];
        let left = format!("{:.1}%", x / VIEW_SIZE * 100.0);
        Some(view! { <ChartTooltip label="" rows=rows left=left/> })
    };

    view! {
        <div class="chart chart--pie">
            <svg class="chart__svg chart__svg--square" viewBox=format!("0 0 {VIEW_SIZE} {VIEW_SIZE}")>
                {slices}
            </svg>
            {tooltip}
        </div>
    }
}
