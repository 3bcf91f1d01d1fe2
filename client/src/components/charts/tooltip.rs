//! Floating tooltip shared by the charts.

use leptos::prelude::*;

/// One line of a tooltip: coloured series name and its value.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub color: &'static str,
    pub name: &'static str,
    pub value: String,
}

/// Tooltip box positioned over the hovered category.
#[component]
pub fn ChartTooltip(label: &'static str, rows: Vec<TooltipRow>, left: String) -> impl IntoView {
    view! {
        <div class="chart-tooltip" style=format!("left: {left};")>
            <p class="chart-tooltip__label">{label}</p>
            {rows
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="chart-tooltip__row">
                            <span class="chart-tooltip__name" style=format!("color: {};", row.color)>
                                {row.name}
                                ":"
                            </span>
                            <span class="chart-tooltip__value">{row.value}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
