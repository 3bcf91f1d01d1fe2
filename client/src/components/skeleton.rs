//! Loading placeholder for the operator row.

use leptos::prelude::*;

#[component]
pub fn PersonnelSkeleton() -> impl IntoView {
    view! {
        <div class="personnel-skeleton" aria-busy="true">
            <span class="skeleton skeleton--circle"></span>
            <span class="skeleton skeleton--text"></span>
        </div>
    }
}
