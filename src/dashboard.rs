//! Dashboard Loader
//!
//! One fetch of the aggregate snapshot per page load. A failure only
//! affects the chart area; KPI cards simply stay unset.

use crate::api::{fetch_dashboard, Transport};
use crate::models::DashboardSnapshot;

pub const LOAD_ERROR: &str = "⚠️ Erro ao carregar dados do BI.";
const UNSET: &str = "—";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready(DashboardSnapshot),
    Failed,
}

impl DashboardState {
    pub async fn load<T: Transport>(transport: &T) -> Self {
        match fetch_dashboard(transport).await {
            Ok(snapshot) => {
                log::info!("[DASHBOARD] {} days of series", snapshot.series.days.len());
                DashboardState::Ready(snapshot)
            }
            Err(err) => {
                log::error!("[DASHBOARD] load failed: {}", err);
                DashboardState::Failed
            }
        }
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            DashboardState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Counter texts in card order: allocated, vacant, substitutions,
    /// productivity.
    pub fn kpi_texts(&self) -> [String; 4] {
        match self.snapshot() {
            Some(s) => [
                s.kpis.allocated.to_string(),
                s.kpis.vacant.to_string(),
                s.kpis.substitutions.to_string(),
                format!("{}%", format_percent(s.kpis.productivity_percent)),
            ],
            None => std::array::from_fn(|_| UNSET.to_string()),
        }
    }

    pub fn chart_title(&self) -> Option<String> {
        self.snapshot()
            .map(|s| format!("Produtividade Geral - {}%", format_percent(s.kpis.productivity_percent)))
    }
}

/// At most two decimals, trailing zeros dropped.
fn format_percent(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
