//! Dashboard Panel Component
//!
//! KPI cards plus the productivity chart. A failed load replaces only the
//! chart container.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::BarChart;
use crate::context::use_app_context;
use crate::dashboard::{DashboardState, LOAD_ERROR};

const KPI_CARDS: [(&str, &str); 4] = [
    ("kpi-alocados", "Alocados"),
    ("kpi-vagos", "Vagos"),
    ("kpi-substituicoes", "Substituições"),
    ("kpi-produtividade", "Produtividade"),
];

#[component]
fn KpiCard(id: &'static str, label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <span class="kpi-label">{label}</span>
            <strong id=id class="kpi-value">{move || value.get()}</strong>
        </div>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(DashboardState::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let transport = ctx.transport();
            state.set(DashboardState::load(&transport).await);
        });
    });

    view! {
        <section class="dashboard">
            <div class="kpi-grid">
                {KPI_CARDS.iter().enumerate().map(|(index, (id, label))| view! {
                    <KpiCard
                        id=*id
                        label=*label
                        value=Signal::derive(move || state.with(|s| s.kpi_texts()[index].clone()))
                    />
                }).collect_view()}
            </div>

            <div id="chart-bi" class="chart-container">
                {move || state.with(|s| match s {
                    DashboardState::Loading => view! {
                        <div class="chart-status">"Carregando…"</div>
                    }.into_any(),
                    DashboardState::Failed => view! {
                        <div class="chart-status chart-error">{LOAD_ERROR}</div>
                    }.into_any(),
                    DashboardState::Ready(snapshot) => view! {
                        <BarChart series=snapshot.series.clone() title=s.chart_title().unwrap_or_default() />
                    }.into_any(),
                })}
            </div>
        </section>
    }
}
