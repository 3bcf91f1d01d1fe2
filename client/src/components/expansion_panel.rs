//! Collapsible section with a clickable summary row.

use leptos::prelude::*;

/// Collapsible panel. While `disabled`, the panel stays collapsed and the
/// summary ignores clicks.
#[component]
pub fn ExpansionPanel(
    title: &'static str,
    #[prop(into)] disabled: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let open = move || expanded.get() && !disabled.get();

    view! {
        <section class="expansion-panel" class:expansion-panel--disabled=move || disabled.get()>
            <button
                class="expansion-panel__summary"
                aria-expanded=move || open().to_string()
                disabled=move || disabled.get()
                on:click=move |_| {
                    if !disabled.get_untracked() {
                        expanded.update(|e| *e = !*e);
                    }
                }
            >
                <p class="chart-title">{title}</p>
                <span class="expansion-panel__icon" class:expansion-panel__icon--open=open>
                    "▾"
                </span>
            </button>
            <Show when=open>
                <div class="expansion-panel__details">{children()}</div>
            </Show>
        </section>
    }
}
