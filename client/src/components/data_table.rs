//! Generic table driven by static column definitions.
//!
//! DESIGN
//! ======
//! Columns map a row to a [`Cell`] through a plain function pointer so
//! column sets can live in `const` slices next to the page that uses them,
//! and the mapping can be tested without rendering.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;

use crate::net::types::EMPTY_FIELD;

/// Rendered content of one table cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Image { src: String, alt: String },
    Empty,
}

impl Cell {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text cell, or the placeholder dash when the value is absent.
    #[must_use]
    pub fn text_or_dash(value: Option<String>) -> Self {
        Self::Text(value.unwrap_or_else(|| EMPTY_FIELD.to_owned()))
    }
}

/// One column of a [`DataTable`].
pub struct Column<T: 'static> {
    pub title: &'static str,
    /// CSS width, e.g. `"20%"`.
    pub width: &'static str,
    pub cell: fn(&T) -> Cell,
}

fn render_cell(cell: Cell) -> impl IntoView {
    match cell {
        Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
        Cell::Image { src, alt } => view! {
            <td>
                <img class="personnel-photo" src=src alt=alt/>
            </td>
        }
        .into_any(),
        Cell::Empty => view! { <td></td> }.into_any(),
    }
}

/// Table of `rows` rendered with `columns`.
///
/// When `on_row_click` is set, rows are clickable and report their index.
#[component]
pub fn DataTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: &'static [Column<T>],
    #[prop(optional)] on_row_click: Option<Callback<usize>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let header = columns
        .iter()
        .map(|column| {
            view! { <th style=format!("width: {};", column.width)>{column.title}</th> }
        })
        .collect_view();

    let body = move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! {
                <tr>
                    <td class="data-table__empty" colspan=columns.len().to_string()>
                        "Kayıt bulunamadı"
                    </td>
                </tr>
            }
            .into_any();
        }
        rows.into_iter()
            .enumerate()
            .map(|(index, row)| {
                let cells = columns
                    .iter()
                    .map(|column| render_cell((column.cell)(&row)))
                    .collect_view();
                view! {
                    <tr
                        class="data-table__row"
                        class:data-table__row--clickable=on_row_click.is_some()
                        on:click=move |_| {
                            if let Some(on_row_click) = on_row_click {
                                on_row_click.run(index);
                            }
                        }
                    >
                        {cells}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <table class="data-table">
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}
