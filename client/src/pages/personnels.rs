//! Personnel list page; entry point to the operator detail screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::data_table::DataTable;
use crate::pages::operator_detail::OPERATOR_COLUMNS;
use crate::state::navigation::NavigationState;
use crate::state::personnels::PersonnelsState;
use crate::state::toast::ToastState;
use crate::util::lifetime::ScreenLifetime;

/// Lists operators; clicking a row opens its detail page.
#[component]
pub fn PersonnelsPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(PersonnelsState { loading: true, ..PersonnelsState::default() });
    let navigate = use_navigate();

    let lifetime = ScreenLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_personnel_list().await;
        if !lifetime.is_alive() {
            return;
        }
        if let Err(e) = &result {
            log::warn!("fetch personnel list failed: {e}");
        }
        crate::util::notify::notify_opt(toasts, state.try_update(|s| s.apply_list(result)).flatten());
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, lifetime);

    Effect::new(move || {
        if let Some(route) = state.with(|s| s.redirect) {
            state.update(|s| s.redirect = None);
            navigate(route, NavigateOptions::default());
        }
    });

    let on_row_click = Callback::new(move |row: usize| {
        let Some(id) = state.with_untracked(|s| s.id_at(row)) else {
            return;
        };
        let route = nav.try_update(|n| n.select_personnel(id));
        state.update(|s| s.redirect = route);
    });

    let rows = Signal::derive(move || state.with(|s| s.items.clone()));

    view! {
        <div class="personnel-list-container">
            <p class="title">"Personeller"</p>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <p>"Yükleniyor..."</p> }>
                <DataTable rows=rows columns=OPERATOR_COLUMNS on_row_click=on_row_click/>
            </Show>
        </div>
    }
}
