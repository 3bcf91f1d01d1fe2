//! Operator detail page: record, static analytics, mission history, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the personnel list, which leaves the selected id in
//! `NavigationState`. On mount the page fetches the operator and then its
//! missions; results, dialog clicks and delete completion all go through
//! `OperatorDetailState` transitions.

#[cfg(test)]
#[path = "operator_detail_test.rs"]
mod operator_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::charts::bar::{BreachLegend, StackedBarChart};
use crate::components::charts::data::{
    AVERAGE_SPEED, DRIVER_SCORE, OPERATION_METRICS, PERSONNEL_DATA_DOUGHNUT, PERSONNEL_DATA_LINE,
    PERSONNEL_DATA_PIE, PERSONNEL_DOUGHNUT_COLORS, PERSONNEL_PIE_COLORS, STACKED_BAR_DATA,
    TOTAL_SPEED_BREACHES,
};
use crate::components::charts::line::LineChart;
use crate::components::charts::pie::PieChart;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::data_table::{Cell, Column, DataTable};
use crate::components::expansion_panel::ExpansionPanel;
use crate::components::skeleton::PersonnelSkeleton;
use crate::net::types::{Mission, Operator};
use crate::state::navigation::NavigationState;
use crate::state::operator_detail::OperatorDetailState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::operator_detail::load_target;
use crate::util::lifetime::ScreenLifetime;
#[cfg(feature = "hydrate")]
use crate::util::notify::{notify, notify_opt};

const DELETE_PROMPT: &str = "Bu personeli silmek istediğinizden emin misiniz?";
const DELETE_LABEL: &str = "Personeli Sil";

pub(crate) const OPERATOR_COLUMNS: &[Column<Operator>] = &[
    Column { title: "", width: "10%", cell: operator_icon },
    Column { title: "ID", width: "20%", cell: |op| Cell::text(op.id.clone()) },
    Column { title: "Ad-Soyad", width: "30%", cell: |op| Cell::text(op.display_name()) },
    Column { title: "Personel Tipi", width: "20%", cell: |op| Cell::text(op.staff_type_name()) },
    Column { title: "Mesai Tipi", width: "20%", cell: |op| Cell::text(op.shift_type_name()) },
];

pub(crate) const MISSION_COLUMNS: &[Column<Mission>] = &[
    Column { title: "Görev No", width: "15%", cell: |m| Cell::text_or_dash(m.id()) },
    Column { title: "Araç", width: "20%", cell: |m| Cell::text_or_dash(m.field("vehicle")) },
    Column { title: "Başlangıç", width: "20%", cell: |m| Cell::text_or_dash(m.field("startedAt")) },
    Column { title: "Bitiş", width: "20%", cell: |m| Cell::text_or_dash(m.field("finishedAt")) },
    Column { title: "Durum", width: "10%", cell: |m| Cell::text_or_dash(m.field("status")) },
    Column { title: "Oluşturulma", width: "15%", cell: |m| Cell::text_or_dash(m.field("createdAt")) },
];

fn operator_icon(op: &Operator) -> Cell {
    match op.icon.as_deref() {
        Some(src) if !src.is_empty() => Cell::Image { src: src.to_owned(), alt: format!("icon-{}", op.name) },
        _ => Cell::Empty,
    }
}

/// Operator detail page.
#[component]
pub fn OperatorDetailPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(OperatorDetailState::default());
    let navigate = use_navigate();

    let lifetime = ScreenLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    // Runs after hydration: the server rendered no toasts and no operator.
    #[cfg(feature = "hydrate")]
    {
        let target = load_target(nav.get_untracked().personnel_id);
        let lifetime = lifetime.clone();
        leptos::task::spawn_local(async move {
            match target {
                Ok(personnel_id) => load(personnel_id, state, toasts, lifetime).await,
                Err(notice) => {
                    if lifetime.is_alive() {
                        log::warn!("operator detail opened without a selected personnel");
                        notify(toasts, notice);
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (nav, toasts);

    Effect::new(move || {
        if let Some(route) = state.with(|s| s.redirect) {
            state.update(|s| {
                s.take_redirect();
            });
            navigate(route, NavigateOptions::default());
        }
    });

    let on_close = Callback::new(move |()| {
        state.update(|s| {
            s.dismiss_delete();
        });
    });

    let on_confirm = Callback::new(move |()| {
        let Some(id) = state.try_update(OperatorDetailState::confirm_delete).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let lifetime = lifetime.clone();
            leptos::task::spawn_local(async move {
                let token = crate::util::auth::access_token();
                let result = crate::net::api::delete_operator(&id, &token).await;
                if !lifetime.is_alive() {
                    return;
                }
                if let Err(e) = &result {
                    log::warn!("delete operator {id} failed: {e}");
                }
                if let Some(notice) = state.try_update(|s| s.finish_delete(result)) {
                    notify(toasts, notice);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_mission_click = Callback::new(move |row: usize| state.update(|s| s.open_mission(row)));

    let operator_rows = Signal::derive(move || state.with(|s| s.operator.clone().into_iter().collect::<Vec<_>>()));
    let missions = Signal::derive(move || state.with(|s| s.missions.clone()));
    let history_disabled = Signal::derive(move || !state.with(OperatorDetailState::mission_history_enabled));

    view! {
        <div class="personnel-detail-container">
            <button class="btn btn--danger delete-button" on:click=move |_| state.update(OperatorDetailState::open_delete)>
                {DELETE_LABEL}
            </button>

            <Show when=move || state.with(|s| s.operator.is_some()) fallback=|| view! { <PersonnelSkeleton/> }>
                <DataTable rows=operator_rows columns=OPERATOR_COLUMNS/>
            </Show>

            <div class="detail-grid">
                <section class="chart-card chart-card--wide">
                    <div class="personnel-breach-top">
                        <p class="chart-title">"Personel İhlal"</p>
                        <BreachLegend/>
                    </div>
                    <StackedBarChart data=STACKED_BAR_DATA/>
                </section>

                <p class="title">"Sürücü Metrikleri"</p>

                <section class="chart-card chart-card--narrow">
                    <div class="table-infos">
                        <InfoRow label="Sürücü Skoru:" value=DRIVER_SCORE.to_string()/>
                        <div class="info">
                            <p class="info-title">"Görev Başarı Grafiği"</p>
                        </div>
                    </div>
                    <PieChart data=PERSONNEL_DATA_DOUGHNUT colors=PERSONNEL_DOUGHNUT_COLORS inner_radius=80.0/>
                </section>

                <section class="chart-card chart-card--broad">
                    <div class="table-infos">
                        <InfoRow label="Toplam Hız ihlali Sayısı:" value=TOTAL_SPEED_BREACHES.to_string()/>
                        <InfoRow label="Ortalam Hız:" value=AVERAGE_SPEED.to_owned()/>
                    </div>
                    <LineChart
                        data=PERSONNEL_DATA_LINE
                        stroke="#707070"
                        unit=" Km"
                        highlight_points=true
                        dashed_grid=true
                    />
                </section>

                <section class="chart-card chart-card--wide chart-card--split">
                    <div>
                        <p class="series-title" style="color: #59CBEB;">"Toplam Taşınan Yük"</p>
                        <LineChart data=PERSONNEL_DATA_LINE stroke="#59CBEB" stroke_width=5.0 unit=" Ton"/>
                    </div>
                    <div>
                        <p class="series-title" style="color: #EC724C;">"Salt Cevher Grafiği"</p>
                        <LineChart data=PERSONNEL_DATA_LINE stroke="#EC724C" stroke_width=5.0 unit=" Ton"/>
                    </div>
                </section>

                <section class="chart-card chart-card--broad">
                    <div class="details">
                        {OPERATION_METRICS
                            .iter()
                            .map(|(label, value)| view! { <InfoRow label=*label value=(*value).to_owned()/> })
                            .collect_view()}
                    </div>
                </section>

                <section class="chart-card chart-card--narrow">
                    <div class="table-infos">
                        <div class="info">
                            <p class="info-title">"Personel Bölge Haritası"</p>
                        </div>
                    </div>
                    <PieChart data=PERSONNEL_DATA_PIE colors=PERSONNEL_PIE_COLORS/>
                </section>

                <div class="chart-card--wide">
                    <ExpansionPanel title="Görev Raporları" disabled=history_disabled>
                        <DataTable rows=missions columns=MISSION_COLUMNS on_row_click=on_mission_click/>
                    </ExpansionPanel>
                </div>
            </div>
        </div>

        <Show when=move || state.with(OperatorDetailState::modal_visible)>
            <ConfirmDialog
                title=DELETE_PROMPT
                confirm_label=DELETE_LABEL
                cancel_label="İptal"
                busy=Signal::derive(move || state.with(OperatorDetailState::delete_loading))
                on_close=on_close
                on_confirm=on_confirm
            />
        </Show>
    }
}

#[component]
fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info">
            <p class="info-title">{label}</p>
            <span class="info-value">{value}</span>
        </div>
    }
}

/// Fetch the operator, then its missions. Each failure toasts on its own;
/// the mission request runs even when the operator request failed.
#[cfg(feature = "hydrate")]
async fn load(
    personnel_id: String,
    state: RwSignal<OperatorDetailState>,
    toasts: RwSignal<ToastState>,
    lifetime: ScreenLifetime,
) {
    let operator = crate::net::api::fetch_operator(&personnel_id).await;
    if !lifetime.is_alive() {
        return;
    }
    if let Err(e) = &operator {
        log::warn!("fetch operator {personnel_id} failed: {e}");
    }
    notify_opt(toasts, state.try_update(|s| s.apply_operator(operator)).flatten());

    let missions = crate::net::api::fetch_missions(&personnel_id).await;
    if !lifetime.is_alive() {
        return;
    }
    if let Err(e) = &missions {
        log::warn!("fetch missions for {personnel_id} failed: {e}");
    }
    notify_opt(toasts, state.try_update(|s| s.apply_missions(missions)).flatten());
}
